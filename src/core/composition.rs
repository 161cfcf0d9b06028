//! Addenda composition
//!
//! Decides how an incoming addenda changes an entry's addenda list and category.
//! Return and NOC addenda are singular: one return reason, one change notice.
//! Forward addenda accumulate. Mixing kinds is not rejected; the last kind
//! attached wins and drops whatever was there before.

use crate::core::EntryDetail;
use crate::types::Addenda;
use tracing::debug;

impl EntryDetail {
    /// Attach an addenda record
    ///
    /// Sets the addenda record indicator to 1. Return and NOC addenda replace the
    /// whole list; Forward addenda are appended to it. Either way the new addenda
    /// ends up last, so the entry's category becomes its kind.
    ///
    /// Returns the addenda list after the change.
    pub fn add_addenda(&mut self, addenda: Addenda) -> &[Addenda] {
        self.addenda_record_indicator = 1;

        match addenda {
            Addenda::Return(_) | Addenda::Noc(_) => {
                if !self.addendum.is_empty() {
                    debug!(
                        trace_number = self.trace_number,
                        dropped = self.addendum.len(),
                        category = %addenda.kind(),
                        "replacing existing addenda"
                    );
                }
                self.addendum.clear();
                self.addendum.push(addenda);
            }
            Addenda::Forward(_) => self.addendum.push(addenda),
        }

        &self.addendum
    }
}

#[cfg(test)]
mod tests {
    use crate::core::EntryDetail;
    use crate::types::{Addenda, Category};
    use rstest::rstest;

    fn addenda(type_code: &str, text: &str) -> Addenda {
        Addenda::parse(&format!("7{}{:<91}", type_code, text)).unwrap()
    }

    #[test]
    fn test_forward_addenda_accumulate() {
        let mut entry = EntryDetail::new();
        entry.add_addenda(addenda("05", "FIRST"));
        let list = entry.add_addenda(addenda("05", "SECOND"));

        assert_eq!(list.len(), 2);
        assert!(list[0].render().contains("FIRST"));
        assert!(list[1].render().contains("SECOND"));
        assert_eq!(entry.category(), Category::Forward);
        assert_eq!(entry.addenda_record_indicator, 1);
    }

    #[rstest]
    #[case::ret("99", Category::Return)]
    #[case::noc("98", Category::Noc)]
    fn test_singular_addenda_clear_forward(#[case] type_code: &str, #[case] expected: Category) {
        let mut entry = EntryDetail::new();
        entry.add_addenda(addenda("05", "FIRST"));
        entry.add_addenda(addenda("05", "SECOND"));
        let list = entry.add_addenda(addenda(type_code, "SINGULAR"));

        assert_eq!(list.len(), 1);
        assert_eq!(list[0].kind(), expected);
        assert_eq!(entry.category(), expected);
        assert_eq!(entry.addenda_record_indicator, 1);
    }

    #[test]
    fn test_second_return_replaces_first() {
        let mut entry = EntryDetail::new();
        entry.add_addenda(addenda("99", "R01"));
        entry.add_addenda(addenda("99", "R02"));

        assert_eq!(entry.addendum().len(), 1);
        assert!(entry.addendum()[0].render().contains("R02"));
        assert_eq!(entry.category(), Category::Return);
    }

    #[test]
    fn test_forward_after_return_keeps_return_and_retags() {
        let mut entry = EntryDetail::new();
        entry.add_addenda(addenda("99", "R01"));
        entry.add_addenda(addenda("05", "DETAIL"));

        assert_eq!(entry.addendum().len(), 2);
        assert_eq!(entry.category(), Category::Forward);
    }

    #[test]
    fn test_noc_after_return_switches_category() {
        let mut entry = EntryDetail::new();
        entry.add_addenda(addenda("99", "R01"));
        entry.add_addenda(addenda("98", "C01"));

        assert_eq!(entry.addendum().len(), 1);
        assert_eq!(entry.category(), Category::Noc);
    }

    #[test]
    fn test_attaching_does_not_change_rendered_fields_other_than_indicator() {
        let mut entry = EntryDetail::new();
        entry.transaction_code = 22;
        entry.set_routing_number("231380104");
        entry.dfi_account_number = "12345".to_string();
        entry.individual_name = "Receiver".to_string();
        entry.set_trace_number("12104288", 1).unwrap();
        let before = entry.render().unwrap();

        entry.add_addenda(addenda("05", "DETAIL"));
        let after = entry.render().unwrap();

        assert_eq!(&before[..78], &after[..78]);
        assert_eq!(&after[78..79], "1");
        assert_eq!(&before[79..], &after[79..]);
    }
}
