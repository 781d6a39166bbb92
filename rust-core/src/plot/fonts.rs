//! Font registration for plot captions, axis descriptions and legends

#[cfg(feature = "labels")]
use std::path::PathBuf;
use std::sync::OnceLock;

/// Environment variable naming a TrueType font file for plot text
pub const FONT_ENV_VAR: &str = "SIGNAL_TOOLKIT_FONT";

/// Family name every chart element asks for
pub const FONT_FAMILY: &str = "sans-serif";

#[cfg(feature = "labels")]
const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Whether text can be drawn on plots
///
/// The first call registers a font under `FONT_FAMILY`: the file named by
/// `SIGNAL_TOOLKIT_FONT` if set, otherwise the first known system font.
pub fn labels_available() -> bool {
    static REGISTERED: OnceLock<bool> = OnceLock::new();
    *REGISTERED.get_or_init(register_font)
}

#[cfg(feature = "labels")]
fn register_font() -> bool {
    use plotters::style::FontStyle;

    let candidates = std::env::var_os(FONT_ENV_VAR)
        .map(PathBuf::from)
        .into_iter()
        .chain(SYSTEM_FONTS.iter().map(PathBuf::from));

    for path in candidates {
        let Ok(bytes) = std::fs::read(&path) else {
            continue;
        };
        // plotters keeps registered fonts for the life of the process
        let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
        match plotters::style::register_font(FONT_FAMILY, FontStyle::Normal, bytes) {
            Ok(()) => {
                log::debug!("plot text uses {}", path.display());
                return true;
            }
            Err(_) => log::warn!("ignoring font {}: invalid font data", path.display()),
        }
    }

    log::warn!("no usable font found, plots are drawn without text (set {FONT_ENV_VAR})");
    false
}

#[cfg(not(feature = "labels"))]
fn register_font() -> bool {
    false
}
