//! Widget settings codec — turns a widget configuration into a short URL token and back.
//!
//! Pieces:
//! 1. Field dictionary — long field name ↔ short code
//! 2. Default table — values that never need to be written
//! 3. Palette — common colors as a single hex nibble
//! 4. Shortcuts — per-field enumerated values as a single character
//! 5. Compact token — minified JSON, base64 without padding
//! 6. Legacy token — the older full-JSON form, still readable
//! 7. Embed URLs — build share links, extract settings from them

pub mod b64;
pub mod compact;
pub mod defaults;
pub mod dictionary;
pub mod legacy;
pub mod palette;
pub mod shortcuts;
pub mod token;
pub mod url;

pub use compact::{decode, encode, try_decode, Decoded, FORMAT_VERSION};
pub use defaults::{apply_defaults, defaults_for};
pub use token::EmbedToken;
pub use url::{create_embed_url, create_embed_url_with, extract_from_url, extract_from_url_with};
