use uuid::Uuid;

/// One bottom-bar entry: a text label plus an icon key resolved through
/// [`crate::icons::icon`].
///
/// The `id` is generated fresh for every declaration unless the declaring
/// view supplies its own via [`TabItem::with_id`].
#[derive(Clone, Debug, PartialEq)]
pub struct TabItem {
    pub id: Uuid,
    pub text: String,
    pub icon: String,
}

impl TabItem {
    pub fn new(text: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            icon: icon.into(),
        }
    }

    /// Same item with a caller-supplied id, stable across re-declarations.
    pub fn with_id(id: Uuid, text: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            icon: icon.into(),
        }
    }
}
