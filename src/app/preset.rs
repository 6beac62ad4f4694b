use indexmap::IndexMap;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preset {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl Preset {
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Result<Self, PresetError> {
        let name = name.into();
        if width == 0 || height == 0 {
            return Err(PresetError::ZeroDimension(name));
        }
        Ok(Preset {
            name,
            width,
            height,
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetError {
    ZeroDimension(String),
    DuplicateName(String),
    UnknownDefault(String),
}

impl fmt::Display for PresetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresetError::ZeroDimension(name) => {
                write!(f, "preset \"{name}\" must have a positive width and height")
            }
            PresetError::DuplicateName(name) => write!(f, "preset \"{name}\" is already defined"),
            PresetError::UnknownDefault(name) => write!(f, "no preset named \"{name}\""),
        }
    }
}

impl std::error::Error for PresetError {}

/// Ordered set of presets, keyed by their unique label.
///
/// Insertion order is display order. Unless [`PresetTable::set_default`] is
/// called, the last-defined preset is the default window size.
#[derive(Clone, Debug, Default)]
pub struct PresetTable {
    presets: IndexMap<String, Preset>,
    default: Option<usize>,
}

impl PresetTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mobile, Tablet, Laptop and Desktop viewports, Laptop being the default.
    pub fn device_presets() -> Self {
        let mut table = PresetTable::new();
        for (name, width, height) in [
            ("Mobile", 375, 667),
            ("Tablet", 768, 1024),
            ("Laptop", 1366, 768),
            ("Desktop", 1920, 1080),
        ] {
            let inserted = Preset::new(name, width, height).and_then(|p| table.insert(p));
            debug_assert!(inserted.is_ok(), "{inserted:?}");
        }
        let defaulted = table.set_default("Laptop");
        debug_assert!(defaulted.is_ok(), "{defaulted:?}");
        table
    }

    pub fn insert(&mut self, preset: Preset) -> Result<(), PresetError> {
        if self.presets.contains_key(&preset.name) {
            return Err(PresetError::DuplicateName(preset.name));
        }
        self.presets.insert(preset.name.clone(), preset);
        Ok(())
    }

    pub fn set_default(&mut self, name: &str) -> Result<(), PresetError> {
        match self.presets.get_index_of(name) {
            Some(index) => {
                self.default = Some(index);
                Ok(())
            }
            None => Err(PresetError::UnknownDefault(name.to_owned())),
        }
    }

    pub fn default_preset(&self) -> Option<&Preset> {
        match self.default {
            Some(index) => self.presets.get_index(index).map(|(_, p)| p),
            None => self.presets.last().map(|(_, p)| p),
        }
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.presets.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.values()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_presets_order() {
        let table = PresetTable::device_presets();
        let names: Vec<&str> = table.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Mobile", "Tablet", "Laptop", "Desktop"]);
        assert_eq!(table.get("Tablet").map(Preset::size), Some((768, 1024)));
    }

    #[test]
    fn test_device_presets_default_is_laptop() {
        let table = PresetTable::device_presets();
        let default = table.default_preset().expect("default preset");
        assert_eq!(default.name, "Laptop");
        assert_eq!(default.size(), (1366, 768));
    }

    #[test]
    fn test_default_falls_back_to_last_defined() {
        let mut table = PresetTable::new();
        table.insert(Preset::new("Small", 100, 200).unwrap()).unwrap();
        table.insert(Preset::new("Big", 800, 600).unwrap()).unwrap();
        assert_eq!(table.default_preset().map(|p| p.name.as_str()), Some("Big"));
    }

    #[test]
    fn test_empty_table_has_no_default() {
        let table = PresetTable::new();
        assert!(table.is_empty());
        assert!(table.default_preset().is_none());
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert_eq!(
            Preset::new("Flat", 320, 0),
            Err(PresetError::ZeroDimension("Flat".to_string()))
        );
        assert!(Preset::new("Thin", 0, 480).is_err());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut table = PresetTable::device_presets();
        let err = table
            .insert(Preset::new("Mobile", 390, 844).unwrap())
            .unwrap_err();
        assert_eq!(err, PresetError::DuplicateName("Mobile".to_string()));
        assert_eq!(table.len(), 4);
        assert_eq!(table.get("Mobile").map(Preset::size), Some((375, 667)));
    }

    #[test]
    fn test_device_presets_complete() {
        let table = PresetTable::device_presets();
        let sizes: Vec<(u32, u32)> = table.iter().map(Preset::size).collect();
        assert_eq!(
            sizes,
            vec![(375, 667), (768, 1024), (1366, 768), (1920, 1080)]
        );
    }

    #[test]
    fn test_unknown_default_rejected() {
        let mut table = PresetTable::device_presets();
        assert!(table.set_default("Watch").is_err());
        assert_eq!(table.default_preset().map(|p| p.name.as_str()), Some("Laptop"));
    }
}
