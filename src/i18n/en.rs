//! English language messages

use super::Messages;
use std::sync::OnceLock;

static EN_MESSAGES: OnceLock<Messages> = OnceLock::new();

pub fn messages() -> &'static Messages {
    EN_MESSAGES.get_or_init(|| Messages {
        // === Menu ===
        menu_prompt: "What would you like to do?",
        menu_upsert: "Create or update a variable",
        menu_delete: "Delete a variable",
        menu_exit: "Exit",
        goodbye: "Bye.",

        // === Prompts ===
        prompt_name: "Variable name",
        prompt_value: "Value",
        remove_prompt: "Remove this variable?",

        // === Validation ===
        name_empty: "Variable name must not be empty",
        name_invalid: "Invalid variable name '{}': use letters, digits and underscores, not starting with a digit",
        value_empty: "Value must not be empty",
        value_multiline: "Value must fit on a single line",

        // === Results ===
        current_value: "Current value of {}: {}",
        not_set: "{} is not set",
        variable_set: "Set {} = '{}'",
        variable_removed: "Removed {}",
        variable_not_found: "{} not found",
        cancelled: "Cancelled.",
        file_created: "Created: {}",

        // === List ===
        no_variables: "No variables found.",
        total_variables: "Total: {} variable(s)",
        header_name: "NAME",
        header_value: "VALUE",

        // === Backup ===
        backup_restored: "Backup restored from: {}",
        no_backups_found: "No backups found.",
        backup_list_header: "Available backups:",
        total_backups: "Total: {} backup(s)",
        backups_removed: "Removed {} old backup(s)",
        no_old_backups: "No old backups to clean.",
        backup_not_found: "Backup not found: {}",
        restoring_backup: "Restoring backup: {} ({})",
        restore_confirm: "This will overwrite {}. Continue?",
        header_id: "ID",
        header_timestamp: "TIMESTAMP",
        header_size: "SIZE",

        // === Reload Hint ===
        reload_hint: "Run '{}' to apply changes",
    })
}
