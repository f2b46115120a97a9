//! Internationalization (i18n) module for exvar
//!
//! Message tables are plain structs of `&'static str`; `{}` marks a
//! placeholder filled in order by [`fill`].

mod en;
mod zh_tw;

use std::sync::OnceLock;

/// All translatable messages in the application
#[derive(Debug, Clone)]
pub struct Messages {
    // === Menu ===
    pub menu_prompt: &'static str,
    pub menu_upsert: &'static str,
    pub menu_delete: &'static str,
    pub menu_exit: &'static str,
    pub goodbye: &'static str,

    // === Prompts ===
    pub prompt_name: &'static str,
    pub prompt_value: &'static str,
    pub remove_prompt: &'static str,

    // === Validation ===
    pub name_empty: &'static str,
    pub name_invalid: &'static str,
    pub value_empty: &'static str,
    pub value_multiline: &'static str,

    // === Results ===
    pub current_value: &'static str,
    pub not_set: &'static str,
    pub variable_set: &'static str,
    pub variable_removed: &'static str,
    pub variable_not_found: &'static str,
    pub cancelled: &'static str,
    pub file_created: &'static str,

    // === List ===
    pub no_variables: &'static str,
    pub total_variables: &'static str,
    pub header_name: &'static str,
    pub header_value: &'static str,

    // === Backup ===
    pub backup_restored: &'static str,
    pub no_backups_found: &'static str,
    pub backup_list_header: &'static str,
    pub total_backups: &'static str,
    pub backups_removed: &'static str,
    pub no_old_backups: &'static str,
    pub backup_not_found: &'static str,
    pub restoring_backup: &'static str,
    pub restore_confirm: &'static str,
    pub header_id: &'static str,
    pub header_timestamp: &'static str,
    pub header_size: &'static str,

    // === Reload Hint ===
    pub reload_hint: &'static str,
}

/// Supported UI languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    TraditionalChinese,
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" | "english" => Ok(Language::English),
            "zh-tw" | "zh-hant" => Ok(Language::TraditionalChinese),
            _ => Err(format!("Unsupported language: {}", s)),
        }
    }
}

fn table(lang: Language) -> &'static Messages {
    match lang {
        Language::English => en::messages(),
        Language::TraditionalChinese => zh_tw::messages(),
    }
}

/// Global messages instance
static MESSAGES: OnceLock<&'static Messages> = OnceLock::new();

/// Initialize and get the global messages instance.
///
/// Unknown language codes fall back to English.
pub fn init_messages(lang: &str) -> &'static Messages {
    MESSAGES.get_or_init(|| {
        let language = lang.parse::<Language>().unwrap_or_else(|e| {
            tracing::warn!("{}, using English", e);
            Language::English
        });
        table(language)
    })
}

/// Get the current global messages (defaults to English if not initialized)
pub fn messages() -> &'static Messages {
    MESSAGES.get_or_init(|| table(Language::English))
}

/// Replace each `{}` in `template` with the next argument
pub fn fill(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut parts = template.split("{}").peekable();
    while let Some(part) = parts.next() {
        out.push_str(part);
        if parts.peek().is_some() {
            out.push_str(args.next().copied().unwrap_or("{}"));
        }
    }
    out
}
