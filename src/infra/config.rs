#[derive(Debug, Clone)]
pub struct AppConfig {
    pub work_dir: String,
    pub images_per_page: usize,
    pub thumb_scale: f32,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            work_dir: ".".to_string(),
            images_per_page: 32,
            thumb_scale: 0.5,
            window_width: 1300.0,
            window_height: 900.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_pages_32_images_at_half_scale() {
        let config = AppConfig::default();
        assert_eq!(config.work_dir, ".");
        assert_eq!(config.images_per_page, 32);
        assert_eq!(config.thumb_scale, 0.5);
    }
}
