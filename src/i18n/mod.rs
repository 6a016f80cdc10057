//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (US)
    #[default]
    EnUS,
    /// Chinese (Simplified)
    ZhCN,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::ZhCN => "中文",
        }
    }

    /// Map a language tag such as "zh", "zh-CN" or "en_US"
    pub fn from_code(code: &str) -> Self {
        if code.to_ascii_lowercase().starts_with("zh") {
            Locale::ZhCN
        } else {
            Locale::EnUS
        }
    }

    /// Detect from the system locale
    pub fn detect() -> Self {
        let current = locale_config::Locale::current().to_string();
        let lang = current.split(['-', ',']).next().unwrap_or_default();
        Self::from_code(lang)
    }

    /// Configured locale if set and non-empty, else the system locale
    pub fn resolve(configured: Option<&str>) -> Self {
        match configured {
            Some(code) if !code.trim().is_empty() => Self::from_code(code.trim()),
            _ => Self::detect(),
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, zh))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // Form
    map.insert("form-title-create", ("Create New Record", "新建记录"));
    map.insert("form-title-edit", ("Edit Record", "编辑记录"));
    map.insert("submit-create", ("Create", "创建"));
    map.insert("submit-update", ("Update", "更新"));
    map.insert("cancel", ("Cancel", "取消"));

    // Fields
    map.insert("field-name", ("Name", "名称"));
    map.insert("field-category", ("Category", "分类"));
    map.insert("field-description", ("Description", "描述"));
    map.insert("field-email", ("Email", "邮箱"));
    map.insert("field-country", ("Country", "国家"));

    // Placeholders
    map.insert("placeholder-name", ("Enter name", "请输入名称"));
    map.insert("placeholder-category", ("Select a category", "请选择分类"));
    map.insert("placeholder-description", ("Enter description", "请输入描述"));
    map.insert("placeholder-email", ("Enter your email", "请输入邮箱"));
    map.insert("placeholder-country", ("Select a country", "请选择国家"));

    // Table
    map.insert("table-title", ("Records", "记录"));
    map.insert("column-created-at", ("Created At", "创建时间"));
    map.insert(
        "table-empty",
        (
            "No records found. Create your first record using the form.",
            "暂无记录，请使用表单创建第一条记录。",
        ),
    );
    map.insert(
        "pagination-total",
        ("{start}-{end} of {total} items", "第 {start}-{end} 条，共 {total} 条"),
    );

    // Notifications
    map.insert("notify-created", ("Record created successfully!", "记录创建成功！"));
    map.insert("notify-updated", ("Record updated successfully!", "记录更新成功！"));
    map.insert("notify-deleted", ("Record deleted successfully!", "记录删除成功！"));
    map.insert(
        "notify-validation",
        ("Please fill in required fields: {fields}", "请填写必填字段：{fields}"),
    );
    map.insert(
        "notify-in-progress",
        (
            "Please wait for the current submission to finish",
            "请等待当前提交完成",
        ),
    );
    map.insert("notify-failed", ("Operation failed, please try again", "操作失败，请重试"));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> String {
    if let Some(&(en, zh)) = translations().get(key) {
        match locale {
            Locale::EnUS => en.to_string(),
            Locale::ZhCN => zh.to_string(),
        }
    } else {
        // Fallback: return the key itself
        key.to_string()
    }
}

/// Translate a key and substitute `{name}` placeholders
pub fn t_args(locale: Locale, key: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(t(locale, key), |text, (name, value)| {
        text.replace(&format!("{{{name}}}"), value)
    })
}
