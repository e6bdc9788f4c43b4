//! Built-in forum views
//!
//! Each view writes markup directly, pulling scalars through the fallback
//! chain and iterating row blocks. Pages compose board chrome via `include`.

mod acp;
mod common;
mod faq;
mod posting;
mod print;
mod ucp;

pub use acp::{AcpFooter, AcpForums, AcpHeader, AcpMain};
pub use common::{Jumpbox, MessageBody, OverallFooter, OverallHeader, SimpleFooter, SimpleHeader};
pub use faq::FaqBody;
pub use posting::{PostingBody, PostingButtons};
pub use print::ViewtopicPrint;
pub use ucp::{UcpFooter, UcpHeader, UcpMain};

use crate::view::View;

/// Every built-in view, ready to register
pub fn builtin() -> Vec<Box<dyn View>> {
    vec![
        // Board chrome and partials
        Box::new(OverallHeader),
        Box::new(OverallFooter),
        Box::new(SimpleHeader),
        Box::new(SimpleFooter),
        Box::new(Jumpbox),
        Box::new(PostingButtons),
        // Pages
        Box::new(MessageBody),
        Box::new(FaqBody),
        Box::new(ViewtopicPrint),
        Box::new(PostingBody),
        // User control panel
        Box::new(UcpHeader),
        Box::new(UcpFooter),
        Box::new(UcpMain),
        // Administration
        Box::new(AcpHeader),
        Box::new(AcpFooter),
        Box::new(AcpMain),
        Box::new(AcpForums),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_names_unique() {
        let views = builtin();
        let names: HashSet<_> = views.iter().map(|v| v.name()).collect();
        assert_eq!(names.len(), views.len());
        assert_eq!(views.len(), 17);
    }
}
