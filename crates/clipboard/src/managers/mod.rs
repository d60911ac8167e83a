mod clipman;
mod clipster;
mod copyq;
mod gpaste;

pub use clipman::Clipman;
pub use clipster::Clipster;
pub use copyq::CopyQ;
pub use gpaste::GPaste;

use crate::ClipboardManager;

/// Every supported manager, in declaration order. Auto selection breaks ties
/// in favour of the later entry.
pub fn registry() -> Vec<Box<dyn ClipboardManager>> {
    vec![
        Box::new(CopyQ),
        Box::new(GPaste),
        Box::new(Clipster),
        Box::new(Clipman::default()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_and_names() {
        let names: Vec<&str> = registry().iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["CopyQ", "GPaste", "Clipster", "Clipman"]);
    }

    #[test]
    fn test_add_capability_flags() {
        let flags: Vec<bool> = registry().iter().map(|m| m.supports_add()).collect();
        assert_eq!(flags, vec![true, true, true, false]);
    }
}
