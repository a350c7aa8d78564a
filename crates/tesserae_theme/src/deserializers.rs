use serde::{Deserialize, Deserializer, de::Error};

/// Reads an optional pixel length given either as a number or as a `"<n>px"`
/// string. The value must be finite and non-negative.
pub fn de_optional_pixels<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    let pixels = match Option::<StringOrFloat>::deserialize(deserializer)? {
        None => return Ok(None),

        Some(StringOrFloat::String(string)) => {
            let string = match string.trim().strip_suffix("px") {
                Some(string) => string,
                None => return Err(D::Error::custom("expected string to end with 'px'")),
            };

            match string.trim().parse::<f32>() {
                Ok(pixels) => pixels,
                Err(_) => return Err(D::Error::custom("could not convert string into pixels")),
            }
        }

        Some(StringOrFloat::Float(pixels)) => pixels,
    };

    if !pixels.is_finite() || pixels < 0. {
        return Err(D::Error::custom(
            "radius must be a non-negative number of pixels",
        ));
    }

    Ok(Some(pixels))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f32),
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize)]
    struct Radius {
        #[serde(default, deserialize_with = "de_optional_pixels")]
        radius: Option<f32>,
    }

    fn radius(json: &str) -> Result<Option<f32>, serde_json::Error> {
        serde_json::from_str::<Radius>(json).map(|r| r.radius)
    }

    #[test]
    fn test_number() {
        assert_eq!(radius(r#"{"radius": 6}"#).unwrap(), Some(6.));
        assert_eq!(radius(r#"{"radius": 2.5}"#).unwrap(), Some(2.5));
    }

    #[test]
    fn test_px_string() {
        assert_eq!(radius(r#"{"radius": "10px"}"#).unwrap(), Some(10.));
    }

    #[test]
    fn test_missing_or_null() {
        assert_eq!(radius("{}").unwrap(), None);
        assert_eq!(radius(r#"{"radius": null}"#).unwrap(), None);
    }

    #[test]
    fn test_rejects_negative_and_unitless_strings() {
        assert!(radius(r#"{"radius": -1}"#).is_err());
        assert!(radius(r#"{"radius": "4"}"#).is_err());
        assert!(radius(r#"{"radius": "abcpx"}"#).is_err());
    }
}
