/// Config sections that can be set from `FOLIO_<SECTION>__<KEY>`.
const SECTIONS: &[&str] = &["REMOTE", "CACHE", "SYNC", "SERVER"];

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured() {
    for warning in collect_unconfigured_warnings(std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();
    for section in SECTIONS {
        let single = format!("FOLIO_{section}_");
        let double = format!("FOLIO_{section}__");
        let mistyped = env_keys
            .iter()
            .filter(|key| key.starts_with(&single) && !key.starts_with(&double))
            .collect::<Vec<_>>();
        if let Some(first) = mistyped.first() {
            warnings.push(format!(
                "{first} is ignored. Use double underscores between section and key (example: {double}{}).",
                &first[single.len()..]
            ));
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::collect_unconfigured_warnings;

    fn env(keys: &[&str]) -> Vec<(String, String)> {
        keys.iter().map(|k| ((*k).to_string(), "x".to_string())).collect()
    }

    #[test]
    fn warns_for_single_underscore_sections() {
        let warnings = collect_unconfigured_warnings(env(&["FOLIO_REMOTE_ORIGIN"]));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("FOLIO_REMOTE__ORIGIN"));
    }

    #[test]
    fn quiet_for_correct_keys() {
        let warnings = collect_unconfigured_warnings(env(&[
            "FOLIO_REMOTE__ORIGIN",
            "FOLIO_SYNC__MAX_ATTEMPTS",
            "FOLIO_LOG",
            "PATH",
        ]));
        assert!(warnings.is_empty());
    }

    #[test]
    fn one_warning_per_section() {
        let warnings =
            collect_unconfigured_warnings(env(&["FOLIO_CACHE_DIR", "FOLIO_CACHE_SLOT", "FOLIO_SERVER_BIND"]));
        assert_eq!(warnings.len(), 2);
    }
}
