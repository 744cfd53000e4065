use serde::{Deserialize, Serialize};

/// Option value meaning "nothing selected".
pub const NO_SELECTION_VALUE: &str = "-1";

/// A catalog post (page, product, ...) reduced to what option lists need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub post_type: String,
    #[serde(default)]
    pub post_title: String,
}

/// One `value → label` entry of a select field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Builds the option list for choosing one post of `post_type`.
///
/// The list opens with a [`NO_SELECTION_VALUE`] entry labelled
/// `placeholder`, followed by the matching posts in catalog order. A post id
/// seen twice keeps its first position and takes the later title.
pub fn post_type_options(posts: &[Post], post_type: &str, placeholder: &str) -> Vec<SelectOption> {
    let mut options = vec![SelectOption::new(NO_SELECTION_VALUE, placeholder)];
    for post in posts.iter().filter(|p| p.post_type == post_type) {
        let value = post.id.to_string();
        match options.iter_mut().find(|o| o.value == value) {
            Some(existing) => existing.label = post.post_title.clone(),
            None => options.push(SelectOption::new(value, post.post_title.clone())),
        }
    }
    options
}
