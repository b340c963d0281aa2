mod bundle;
mod format;
mod locales;
mod render;

pub use bundle::{I18nBundle, current_lang, set_lang};
pub use format::{fmt_brl, fmt_brl_plain, fmt_discount, fmt_number};
pub use locales::DEFAULT_LANG;
pub use render::{t, tr};
