//! Web application project (WAP) classification.

use std::collections::BTreeSet;

use uuid::Uuid;

use crate::core::project_type::guids;

/// Decides from a project's declared type GUIDs whether it is a WAP.
pub trait WapClassifier: Send + Sync {
    fn is_wap(&self, type_guids: &BTreeSet<Uuid>) -> bool;
}

impl<F> WapClassifier for F
where
    F: Fn(&BTreeSet<Uuid>) -> bool + Send + Sync,
{
    fn is_wap(&self, type_guids: &BTreeSet<Uuid>) -> bool {
        self(type_guids)
    }
}

/// Classifier matching against a fixed list of WAP flavor GUIDs.
///
/// The web application flavor GUID is always included; configuration can
/// add more (e.g. MVC flavors some tooling emits on their own).
#[derive(Debug, Clone)]
pub struct KnownGuidClassifier {
    wap_guids: Vec<Uuid>,
}

impl KnownGuidClassifier {
    pub fn new() -> Self {
        KnownGuidClassifier {
            wap_guids: vec![guids::WEB_APPLICATION],
        }
    }

    /// Also treat projects declaring `guid` as web applications.
    pub fn with_guid(mut self, guid: Uuid) -> Self {
        if !self.wap_guids.contains(&guid) {
            self.wap_guids.push(guid);
        }
        self
    }

    /// Get the GUIDs that mark a project as a WAP.
    pub fn wap_guids(&self) -> &[Uuid] {
        &self.wap_guids
    }
}

impl Default for KnownGuidClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl WapClassifier for KnownGuidClassifier {
    fn is_wap(&self, type_guids: &BTreeSet<Uuid>) -> bool {
        self.wap_guids.iter().any(|guid| type_guids.contains(guid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::uuid;

    #[test]
    fn test_default_classifier() {
        let classifier = KnownGuidClassifier::default();

        let wap = BTreeSet::from([guids::WEB_APPLICATION, guids::CSHARP]);
        assert!(classifier.is_wap(&wap));

        let library = BTreeSet::from([guids::CSHARP]);
        assert!(!classifier.is_wap(&library));
        assert!(!classifier.is_wap(&BTreeSet::new()));
    }

    #[test]
    fn test_classifier_with_extra_guid() {
        let mvc = uuid!("E3E379DF-F4C6-4180-9B81-6769533ABE47");
        let classifier = KnownGuidClassifier::new().with_guid(mvc).with_guid(mvc);

        assert_eq!(classifier.wap_guids().len(), 2);
        assert!(classifier.is_wap(&BTreeSet::from([mvc])));
    }

    #[test]
    fn test_closure_classifier() {
        let never = |_: &BTreeSet<Uuid>| false;
        assert!(!never.is_wap(&BTreeSet::from([guids::WEB_APPLICATION])));
    }
}
