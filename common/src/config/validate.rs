/// Checked after every load and before every save of a config.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
