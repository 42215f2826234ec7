mod media;

pub use media::MediaCommands;
