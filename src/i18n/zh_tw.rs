//! Traditional Chinese (zh-TW) language messages

use super::Messages;
use std::sync::OnceLock;

static ZH_TW_MESSAGES: OnceLock<Messages> = OnceLock::new();

pub fn messages() -> &'static Messages {
    ZH_TW_MESSAGES.get_or_init(|| Messages {
        // === Menu ===
        menu_prompt: "請選擇操作",
        menu_upsert: "新增或更新變數",
        menu_delete: "刪除變數",
        menu_exit: "離開",
        goodbye: "再見。",

        // === Prompts ===
        prompt_name: "變數名稱",
        prompt_value: "值",
        remove_prompt: "確定要刪除此變數？",

        // === Validation ===
        name_empty: "變數名稱不可為空",
        name_invalid: "無效的變數名稱 '{}'：僅可使用字母、數字與底線，且不可以數字開頭",
        value_empty: "值不可為空",
        value_multiline: "值必須為單行",

        // === Results ===
        current_value: "{} 目前的值：{}",
        not_set: "{} 尚未設定",
        variable_set: "已設定 {} = '{}'",
        variable_removed: "已移除 {}",
        variable_not_found: "找不到 {}",
        cancelled: "已取消。",
        file_created: "已建立：{}",

        // === List ===
        no_variables: "找不到任何變數。",
        total_variables: "總計：{} 個變數",
        header_name: "名稱",
        header_value: "值",

        // === Backup ===
        backup_restored: "已從備份還原：{}",
        no_backups_found: "找不到任何備份。",
        backup_list_header: "可用的備份：",
        total_backups: "總計：{} 份備份",
        backups_removed: "已移除 {} 份舊備份",
        no_old_backups: "沒有需要清理的舊備份。",
        backup_not_found: "找不到備份：{}",
        restoring_backup: "正在還原備份：{}（{}）",
        restore_confirm: "這將覆寫 {}，是否繼續？",
        header_id: "ID",
        header_timestamp: "時間戳記",
        header_size: "大小",

        // === Reload Hint ===
        reload_hint: "執行 '{}' 以套用變更",
    })
}
