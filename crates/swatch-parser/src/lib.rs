//! Parser for the restricted CSS theme dialect.
//!
//! Turns a `@theme inline` block plus `:root`/`.light` and `.dark` mode
//! blocks into a table of variable mappings. The pipeline runs in four pure
//! stages with no shared state: block extraction, declaration parsing,
//! reference resolution, and mapping assembly.

mod blocks;
mod declarations;
mod lexer;
mod reference;
mod theme;

pub use blocks::{extract_blocks, ThemeBlocks};
pub use declarations::{mode_declarations, parse_declarations};
pub use reference::resolve_reference;
pub use theme::{parse_theme, parse_theme_file, ThemeFile};

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;
    use swatch_core::ParseError;

    use crate::resolve_reference;

    proptest! {
        /// For any identifier of lowercase alphanumerics and hyphens,
        /// resolving `var(--X)` yields `X` with every `-` replaced by `/`.
        #[test]
        fn round_trip_naming(ident in "[a-z][a-z0-9]{0,8}(-[a-z0-9]{1,6}){0,4}") {
            let path = resolve_reference(&format!("var(--{ident})")).unwrap();
            prop_assert_eq!(path.canonical(), ident.replace('-', "/"));
        }

        /// Every valid opacity renders as either no suffix (100%) or a
        /// two-digit zero-padded step.
        #[test]
        fn opacity_suffix_shape(opacity in 0u32..=100) {
            let raw = format!("--alpha(var(--color-red-500) / {opacity}%)");
            let path = resolve_reference(&raw).unwrap();
            if opacity == 100 {
                prop_assert_eq!(path.canonical(), "color/red/500");
            } else {
                prop_assert_eq!(path.canonical(), format!("color/red/500_{opacity:02}"));
            }
        }

        /// Opacities past 100% never resolve.
        #[test]
        fn oversized_opacity_rejected(opacity in 101u32..=9999) {
            let raw = format!("--alpha(var(--color-red-500) / {opacity}%)");
            prop_assert_eq!(
                resolve_reference(&raw).unwrap_err(),
                ParseError::InvalidOpacity { value: opacity.to_string() }
            );
        }
    }
}
