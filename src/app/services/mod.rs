mod synthesizer;

pub use synthesizer::Synthesizer;
