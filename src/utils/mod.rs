pub mod image_data;
pub mod url_validator;

/// Fresh identifier for an uploaded image
pub fn generate_image_id() -> String {
    format!("img_{}", uuid::Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_image_id() {
        let a = generate_image_id();
        let b = generate_image_id();
        assert!(a.starts_with("img_"));
        assert_eq!(a.len(), 4 + 32);
        assert_ne!(a, b);
    }
}
