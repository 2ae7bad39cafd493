//! Serde adapters for preference values.

pub mod hex_color {
    //! (De)serializes an [`egui::Color32`] as an `#rrggbb` string.

    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(
        color: &egui::Color32,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        to_str(color).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<egui::Color32, D::Error> {
        from_str(&String::deserialize(deserializer)?).map_err(D::Error::custom)
    }

    pub fn to_str(color: &egui::Color32) -> String {
        format!("#{}", hex::encode(&color.to_srgba_unmultiplied()[..3]))
    }

    pub fn from_str(s: &str) -> Result<egui::Color32, hex::FromHexError> {
        let mut rgb = [0_u8; 3];
        hex::decode_to_slice(s.trim().trim_start_matches('#'), &mut rgb)?;
        let [r, g, b] = rgb;
        Ok(egui::Color32::from_rgb(r, g, b))
    }

}
