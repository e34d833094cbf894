use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(1);

/// Toasts visible at once. The newest wins.
pub const TOAST_LIMIT: usize = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

/// A transient user-visible notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn new(title: &str, description: &str, variant: ToastVariant) -> Self {
        Self {
            id: NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed),
            title: title.to_string(),
            description: description.to_string(),
            variant,
        }
    }

    pub fn success(title: &str, description: &str) -> Self {
        Self::new(title, description, ToastVariant::Default)
    }

    pub fn error(title: &str, description: &str) -> Self {
        Self::new(title, description, ToastVariant::Destructive)
    }

    pub fn is_error(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }
}

/// Put `toast` in front and drop whatever no longer fits.
pub fn push_toast(toasts: &mut Vec<Toast>, toast: Toast) {
    toasts.insert(0, toast);
    toasts.truncate(TOAST_LIMIT);
}

/// Returns false when the toast was already gone, e.g. replaced by a newer
/// one before its timer ran out.
pub fn remove_toast(toasts: &mut Vec<Toast>, id: u64) -> bool {
    let before = toasts.len();
    toasts.retain(|toast| toast.id != id);
    toasts.len() != before
}
