//! Serde roundtrip and JsonSchema validation for the content document.

use folio_core::ContentDocument;
use folio_core::entities::*;
use folio_core::enums::ServiceIcon;
use folio_core::responses::StoreEnvelope;
use pretty_assertions::assert_eq;
use schemars::schema_for;
use serde_json::json;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn sample_document() -> ContentDocument {
    let mut doc = ContentDocument::default();
    doc.hero.title1 = "Creative".into();
    doc.hero.title2 = "Developer".into();
    doc.about.skills = vec![Skill {
        name: "Rust".into(),
        level: 85,
    }];
    doc.about.education = vec![Education {
        degree: "BSc Computer Science".into(),
        school: "State University".into(),
    }];
    doc.about.timeline = vec![TimelineEntry {
        year: "2021 - 2023".into(),
        description: "Freelance web work".into(),
    }];
    doc.about.cv_url = Some("https://example.com/cv.pdf".into());
    doc.contact.email = "hello@example.com".into();
    doc.contact.custom_links = Some(vec![CustomLink {
        name: "Blog".into(),
        url: "https://blog.example.com".into(),
    }]);
    doc.projects = vec![Project {
        id: "1".into(),
        title: "E-STORE WEBSITE".into(),
        description: "Responsive online shop with a basic cart.".into(),
        category: "E-COMMERCE".into(),
        tech: vec!["HTML".into(), "TAILWIND".into(), "JAVASCRIPT".into()],
        image_url: "https://images.example.com/store.jpg".into(),
        hover_image_url: Some("https://images.example.com/store-hover.jpg".into()),
        live_url: "https://store.example.com/".into(),
        badge: Some("E-COMMERCE".into()),
    }];
    doc.services = vec![Service {
        id: "s1".into(),
        title: "Bespoke UI Design".into(),
        description: "Interfaces focused on conversion.".into(),
        icon_type: ServiceIcon::Layout,
    }];
    doc.gallery = vec![GalleryItem {
        id: "g1".into(),
        title: "Night city".into(),
        description: "Long exposure".into(),
        image_url: "https://images.example.com/city.jpg".into(),
        metadata: "35mm / 2022".into(),
    }];
    doc.media_library = vec!["data:image/png;base64,AAAA".into()];
    doc
}

#[test]
fn full_document_roundtrips_and_validates() {
    let doc = sample_document();

    let json_str = serde_json::to_string_pretty(&doc).unwrap();
    let recovered: ContentDocument = serde_json::from_str(&json_str).unwrap();
    assert_eq!(recovered, doc);

    let schema = serde_json::to_value(schema_for!(ContentDocument)).unwrap();
    let instance = serde_json::to_value(&doc).unwrap();
    let errors = validate_against_schema(&schema, &instance);
    assert!(errors.is_empty(), "schema validation failed: {errors:?}");
}

#[test]
fn default_document_validates() {
    let schema = serde_json::to_value(schema_for!(ContentDocument)).unwrap();
    let instance = serde_json::to_value(ContentDocument::default()).unwrap();
    let errors = validate_against_schema(&schema, &instance);
    assert!(errors.is_empty(), "schema validation failed: {errors:?}");
}

#[test]
fn reads_document_written_by_the_web_front_end() {
    let raw = json!({
        "version": 1,
        "auth": {"username": "admin", "password": "admin"},
        "hero": {"title1": "Hello", "title2": "World", "subtitle": "Welcome", "backgroundImage": ""},
        "about": {
            "homepageTitle1": "Hi", "homepageTitleAccent": "There", "homepageDescription": "",
            "homepageImage": "", "detailedBio": "", "detailedImage": "",
            "skills": [{"name": "React", "level": 90}], "education": [], "timeline": []
        },
        "contact": {"email": "", "phone": "", "whatsapp": "", "github": "", "linkedin": "",
                    "facebook": "", "instagram": "", "customLinks": []},
        "gallery": [],
        "projects": [{
            "id": "2", "title": "RESTAURANT WEBSITE", "description": "Menus", "category": "RESTAURANT",
            "badge": "RESTAURANT", "tech": ["HTML", "CSS"], "imageUrl": "https://x/y.jpg",
            "liveUrl": "https://food.example.com/"
        }],
        "services": [{"id": "s4", "title": "Mobile Excellence", "description": "", "iconType": "smartphone"}],
        "menuNames": {
            "public": {"home": "Home", "projects": "Projects", "about": "About", "services": "Services", "contact": "Contact"},
            "admin": {"hero": "Hero", "about": "Persona", "gallery": "Archive", "projects": "Work", "services": "Tech", "media": "Vault"}
        },
        "mediaLibrary": []
    });

    let doc: ContentDocument = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(doc.about.skills[0].level, 90);
    assert_eq!(doc.projects[0].hover_image_url, None);
    assert_eq!(doc.services[0].icon_type, ServiceIcon::Smartphone);

    // Writing it back yields the same JSON the front end produced.
    assert_eq!(serde_json::to_value(&doc).unwrap(), raw);
}

#[test]
fn envelope_carries_document_payload() {
    let doc = sample_document();
    let envelope = StoreEnvelope::with_data(serde_json::to_value(&doc).unwrap());
    let wire = serde_json::to_string(&envelope).unwrap();

    let parsed: StoreEnvelope = serde_json::from_str(&wire).unwrap();
    let recovered = parsed.into_document().unwrap().unwrap();
    assert_eq!(recovered, doc);
}
