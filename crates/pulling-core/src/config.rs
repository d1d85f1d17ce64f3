use crate::error::Result;
use crate::types::ElementRole;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE: &str = "pulling.yaml";

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// Vocabulary
// ---------------------------------------------------------------------------

/// Element names the rules recognise, per role.
///
/// Datasheets are filled by hand, so the same component shows up under
/// several spellings. Roles matched by substring accept any element name
/// containing one of the aliases; the others need the whole (trimmed) name.
/// All comparisons are case-insensitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    #[serde(default = "default_rod")]
    pub rod: Vec<String>,
    #[serde(default = "default_sucker_rod")]
    pub sucker_rod: Vec<String>,
    #[serde(default = "default_pump_model")]
    pub pump_model: String,
    #[serde(default = "default_pump")]
    pub pump: Vec<String>,
    #[serde(default = "default_anchor")]
    pub anchor: Vec<String>,
    #[serde(default = "default_shoe")]
    pub shoe: Vec<String>,
    #[serde(default = "default_tubing")]
    pub tubing: Vec<String>,
    #[serde(default = "default_shear_out")]
    pub shear_out: Vec<String>,
    #[serde(default = "default_on_off")]
    pub on_off: Vec<String>,
    #[serde(default = "default_tubing_pump")]
    pub tubing_pump: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_rod() -> Vec<String> {
    strings(&["VARILLA", "VÁSTAGO", "TROZO VARILLA", "ROD"])
}

fn default_sucker_rod() -> Vec<String> {
    strings(&["VARILLA DE BOMBEO", "SUCKER ROD"])
}

fn default_pump_model() -> String {
    "BOMBA CONVENCIONAL INSERTABLE BM".to_string()
}

fn default_pump() -> Vec<String> {
    strings(&["BOMBA", "PUMP"])
}

fn default_anchor() -> Vec<String> {
    strings(&["ANCLA", "ANCHOR"])
}

fn default_shoe() -> Vec<String> {
    strings(&["ZAPATO", "SHOE"])
}

fn default_tubing() -> Vec<String> {
    strings(&["TUBING"])
}

fn default_shear_out() -> Vec<String> {
    strings(&["SHEAR OUT"])
}

fn default_on_off() -> Vec<String> {
    strings(&["ON-OFF"])
}

fn default_tubing_pump() -> Vec<String> {
    strings(&["BBA.TBG.PUMP", "BBA. TUB.PUMP"])
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            rod: default_rod(),
            sucker_rod: default_sucker_rod(),
            pump_model: default_pump_model(),
            pump: default_pump(),
            anchor: default_anchor(),
            shoe: default_shoe(),
            tubing: default_tubing(),
            shear_out: default_shear_out(),
            on_off: default_on_off(),
            tubing_pump: default_tubing_pump(),
        }
    }
}

impl Vocabulary {
    /// Whether `element` plays `role`.
    pub fn matches(&self, role: ElementRole, element: &str) -> bool {
        let name = element.trim().to_uppercase();
        if name.is_empty() {
            return false;
        }
        if role == ElementRole::PumpModel {
            return name == self.pump_model.trim().to_uppercase();
        }
        let aliases = self.aliases(role);
        if role.matches_substring() {
            aliases
                .iter()
                .any(|a| !a.trim().is_empty() && name.contains(&a.trim().to_uppercase()))
        } else {
            aliases.iter().any(|a| name == a.trim().to_uppercase())
        }
    }

    fn aliases(&self, role: ElementRole) -> &[String] {
        match role {
            ElementRole::Rod => &self.rod,
            ElementRole::SuckerRod => &self.sucker_rod,
            ElementRole::PumpModel => std::slice::from_ref(&self.pump_model),
            ElementRole::Pump => &self.pump,
            ElementRole::Anchor => &self.anchor,
            ElementRole::Shoe => &self.shoe,
            ElementRole::Tubing => &self.tubing,
            ElementRole::ShearOut => &self.shear_out,
            ElementRole::OnOff => &self.on_off,
            ElementRole::TubingPump => &self.tubing_pump,
        }
    }
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub vocabulary: Vocabulary,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        if data.trim().is_empty() {
            return Ok(Self::builtin());
        }
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    /// Load `path` when given, otherwise fall back to the built-in vocabulary.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::builtin()),
        }
    }

    pub fn builtin() -> Self {
        Self {
            version: default_version(),
            vocabulary: Vocabulary::default(),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(path, data.as_bytes())
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.version != 1 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!("unknown config version {}; expected 1", self.version),
            });
        }

        if self.vocabulary.pump_model.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "vocabulary.pump_model is empty: pump depth and relocation never apply"
                    .to_string(),
            });
        }

        for role in ElementRole::all() {
            if *role == ElementRole::PumpModel {
                continue;
            }
            let aliases = self.vocabulary.aliases(*role);
            if aliases.iter().all(|a| a.trim().is_empty()) {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!(
                        "vocabulary.{} has no aliases: no element will match this role",
                        role.as_str()
                    ),
                });
            }
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn substring_roles_match_inside_longer_names() {
        let v = Vocabulary::default();
        assert!(v.matches(ElementRole::Rod, "Varilla de bombeo 7/8"));
        assert!(v.matches(ElementRole::Rod, "TROZO VARILLA"));
        assert!(v.matches(ElementRole::Rod, "ROD"));
        assert!(v.matches(ElementRole::OnOff, "CONECTOR ON-OFF 2 3/8"));
        assert!(!v.matches(ElementRole::Rod, "TUBING"));
    }

    #[test]
    fn exact_roles_need_the_whole_name() {
        let v = Vocabulary::default();
        assert!(v.matches(ElementRole::Anchor, " ancla "));
        assert!(!v.matches(ElementRole::Anchor, "ANCLA TENSORA"));
        assert!(v.matches(ElementRole::Tubing, "TUBING"));
        assert!(!v.matches(ElementRole::Tubing, "TUBING J-55"));
    }

    #[test]
    fn pump_model_is_exact() {
        let v = Vocabulary::default();
        assert!(v.matches(
            ElementRole::PumpModel,
            "bomba convencional insertable BM"
        ));
        assert!(!v.matches(ElementRole::PumpModel, "BOMBA TUBING PUMP"));
        assert!(v.matches(ElementRole::Pump, "BOMBA TUBING PUMP"));
    }

    #[test]
    fn blank_element_never_matches() {
        let v = Vocabulary::default();
        for role in ElementRole::all() {
            assert!(!v.matches(*role, "   "));
        }
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let cfg: Config = serde_yaml::from_str("vocabulary:\n  anchor: [TAC]\n").unwrap();
        assert_eq!(cfg.version, 1);
        assert!(cfg.vocabulary.matches(ElementRole::Anchor, "TAC"));
        assert!(!cfg.vocabulary.matches(ElementRole::Anchor, "ANCLA"));
        assert!(cfg.vocabulary.matches(ElementRole::Shoe, "ZAPATO"));
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let mut cfg = Config::builtin();
        cfg.vocabulary.pump_model = "BOMBA INSERTABLE 25-150".to_string();
        cfg.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.vocabulary, cfg.vocabulary);
    }

    #[test]
    fn empty_file_is_builtin() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "").unwrap();
        let cfg = Config::load(&path).unwrap();
        assert_eq!(cfg.vocabulary, Vocabulary::default());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(Config::load(&dir.path().join("nope.yaml")).is_err());
    }

    #[test]
    fn builtin_has_no_warnings() {
        assert!(Config::builtin().validate().is_empty());
    }

    #[test]
    fn empty_roles_warn() {
        let mut cfg = Config::builtin();
        cfg.vocabulary.shoe.clear();
        cfg.vocabulary.pump_model = " ".to_string();
        let warnings = cfg.validate();
        assert!(warnings
            .iter()
            .any(|w| w.level == WarnLevel::Error && w.message.contains("pump_model")));
        assert!(warnings
            .iter()
            .any(|w| w.level == WarnLevel::Warning && w.message.contains("vocabulary.shoe")));
    }
}
