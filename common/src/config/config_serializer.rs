use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TConfig> {
    /// Short format name used in error messages.
    fn format_name(&self) -> &'static str;
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

#[derive(Default)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn format_name(&self) -> &'static str {
        "YAML"
    }

    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        let format_name = ConfigSerializer::<TConfig>::format_name(self);
        serde_yaml_ng::to_string(config)
            .map_err(|e| format!("Failed to write {} config: {}", format_name, e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        let format_name = ConfigSerializer::<TConfig>::format_name(self);
        serde_yaml_ng::from_str(content)
            .map_err(|e| format!("Failed to parse {} config: {}", format_name, e))
    }
}
