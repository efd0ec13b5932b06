/// The fixed series palette shared by every builder. Injected as a
/// value so builders stay pure; the default instance is the only
/// process-wide constant in the engine, and it is read-only.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<&'static str>,
}

const SERIES_COLORS: [&str; 15] = [
    "#3498db", "#2ecc71", "#e74c3c", "#f39c12", "#9b59b6",
    "#1abc9c", "#d35400", "#34495e", "#16a085", "#c0392b",
    "#8e44ad", "#27ae60", "#2980b9", "#f1c40f", "#e67e22",
];

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: SERIES_COLORS.to_vec(),
        }
    }
}

impl Palette {
    /// A custom palette for `generate_with`.
    ///
    /// # Panics
    ///
    /// Panics on an empty color list; `color()` cycles modulo the
    /// palette length.
    pub fn new(colors: Vec<&'static str>) -> Self {
        assert!(!colors.is_empty(), "palette requires at least one color");
        Self { colors }
    }

    /// Color for the n-th series or point, cycling through the palette.
    pub fn color(&self, index: usize) -> &str {
        self.colors[index % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 15);
        assert_eq!(palette.color(0), "#3498db");
        assert_eq!(palette.color(15), palette.color(0));
        assert_eq!(palette.color(31), palette.color(1));
    }

    #[test]
    fn test_custom_palette() {
        let palette = Palette::new(vec!["#111111", "#222222"]);
        assert_eq!(palette.color(0), "#111111");
        assert_eq!(palette.color(2), "#111111");
        assert_eq!(palette.color(3), "#222222");
    }

    #[test]
    #[should_panic(expected = "at least one color")]
    fn test_empty_palette_rejected() {
        Palette::new(Vec::new());
    }
}
