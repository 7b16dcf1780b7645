//! Scan context bits and the caller-facing option set.

use serde::{Deserialize, Serialize};

/// Context bits supplied by the caller for each scan. The scanner reads
/// only the bits that affect lexing; scope masks belong to the parser.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Context {
    None = 0,
    Strict = 1,
    Module = 1 << 1,
    AllowRegExp = 1 << 2,
    OptionsNext = 1 << 3,
    OptionsRaw = 1 << 4,
    DisableWebCompat = 1 << 5,
    InTemplate = 1 << 6,
}

/// Check a context word for a bit.
#[inline]
pub fn context_has(context: u32, bit: Context) -> bool {
    context & bit as u32 != 0
}

/// Parse options recognized by the scanning layer. Unknown concerns
/// (`loc`, `ranges`, `directives`, …) are accepted and forwarded so a
/// parser embedding this scanner can share one options struct.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Parse as a module (implies strict mode, disables HTML comments).
    pub module: bool,
    /// Enable stage-3 proposal tokens.
    pub next: bool,
    /// Attach the raw source slice to every token.
    pub raw: bool,
    /// Allow Annex B HTML-like comments in script mode.
    pub webcompat: bool,
    pub loc: bool,
    pub ranges: bool,
    pub directives: bool,
    pub global_return: bool,
    /// Treat the whole source as strict code.
    pub implied_strict: bool,
    pub jsx: bool,
    pub spec_deviation: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            module: false,
            next: false,
            raw: false,
            webcompat: true,
            loc: false,
            ranges: false,
            directives: false,
            global_return: false,
            implied_strict: false,
            jsx: false,
            spec_deviation: false,
        }
    }
}

impl Options {
    /// Lower the option set to the base context word for every scan call.
    pub fn to_context(&self) -> u32 {
        let mut context = Context::None as u32;
        if self.module {
            context |= Context::Module as u32 | Context::Strict as u32;
        }
        if self.implied_strict {
            context |= Context::Strict as u32;
        }
        if self.next {
            context |= Context::OptionsNext as u32;
        }
        if self.raw {
            context |= Context::OptionsRaw as u32;
        }
        if !self.webcompat {
            context |= Context::DisableWebCompat as u32;
        }
        context
    }
}
