use serde::Deserialize;

pub const MAX_TITLE_CHARS: usize = 100;
pub const UNIQUE_LIST_TITLE: &str = "The list title must be unique.";

#[derive(Debug, Clone, Deserialize)]
pub struct ListTitleForm {
    #[serde(rename = "todoListTitle", default)]
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TodoTitleForm {
    #[serde(rename = "todoTitle", default)]
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SigninForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Messages for one kind of title field.
pub struct TitleRules {
    pub required: &'static str,
    pub length: &'static str,
}

pub const LIST_TITLE: TitleRules = TitleRules {
    required: "The list title is required.",
    length: "List title must be between 1 and 100 characters.",
};

pub const TODO_TITLE: TitleRules = TitleRules {
    required: "The todo title is required.",
    length: "Todo title must be between 1 and 100 characters.",
};

/// Trims `raw` and checks it against `rules`, returning the trimmed title.
pub fn validate_title(raw: &str, rules: &TitleRules) -> Result<String, &'static str> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(rules.required);
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(rules.length);
    }
    Ok(title.to_string())
}
