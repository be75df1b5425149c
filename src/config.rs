#[derive(Debug, Clone)]
pub struct Config {
    pub terms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self { terms: 10 }
    }
}
