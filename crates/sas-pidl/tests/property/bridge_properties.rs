use sas_pidl::collectors::{ErrorList, TextWriterErrorCollector};
use sas_pidl::{PidlSasErrorCollector, SasPidlErrorCollector};
use sas_pidl_core::{PidlError, PidlErrorCollector, SasErrorCollector};
use proptest::prelude::*;

proptest! {
    #[test]
    fn pidl_to_sas_returns_bracketed_code(code in any::<i64>(), message in ".{0,40}") {
        let mut list = ErrorList::new();
        let shown = PidlSasErrorCollector::new(&mut list).add(code, &message);
        prop_assert_eq!(&shown, &format!("[{}] {}", code, message));
        prop_assert_eq!(list.into_errors(), vec![PidlError::new(code, message)]);
    }

    #[test]
    fn pidl_to_sas_keeps_order(entries in prop::collection::vec((any::<i64>(), ".{0,20}"), 0..12)) {
        let mut list = ErrorList::new();
        {
            let mut bridge = PidlSasErrorCollector::new(&mut list);
            for (code, message) in &entries {
                bridge.add(*code, message);
            }
        }
        let expected: Vec<PidlError> = entries
            .iter()
            .map(|(code, message)| PidlError::new(*code, message.as_str()))
            .collect();
        prop_assert_eq!(list.into_errors(), expected);
    }

    #[test]
    fn sas_to_pidl_entry_matches_fields(code in any::<i64>(), message in ".{0,40}") {
        let entry = PidlError::new(code, message.as_str());

        let mut by_entry = TextWriterErrorCollector::new(Vec::new());
        SasPidlErrorCollector::new(&mut by_entry).add_error(&entry);

        let mut by_fields = TextWriterErrorCollector::new(Vec::new());
        SasPidlErrorCollector::new(&mut by_fields).add(code, &message);

        let a = by_entry.into_inner();
        prop_assert_eq!(&a, &by_fields.into_inner());
        prop_assert_eq!(a, format!("[{}] {}\n", code, message).into_bytes());
    }

    #[test]
    fn bridges_compose_to_identity(code in any::<i64>(), message in ".{0,40}") {
        let mut list = ErrorList::new();
        let shown = {
            let mut sas = PidlSasErrorCollector::new(&mut list);
            SasPidlErrorCollector::new(&mut sas).add(code, &message);
            sas.add(code, &message)
        };
        prop_assert_eq!(shown, format!("[{}] {}", code, message));
        let entry = PidlError::new(code, message);
        prop_assert_eq!(list.into_errors(), vec![entry.clone(), entry]);
    }
}
