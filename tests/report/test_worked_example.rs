// End-to-end check of a typical element-not-found report: matcher and
// hierarchy present, everything else absent. The output must be exactly
// reason, matcher, hierarchy, with single blank-line joins.

use uiprobe_core::{ErrorRecord, CODE_ELEMENT_NOT_FOUND, INTERACTION_ERROR_DOMAIN};
use uiprobe_report::{format_interaction_failure, render_hierarchy};

#[test]
fn test_not_found_with_matcher_and_hierarchy_only() {
    let mut record = ErrorRecord::new(
        INTERACTION_ERROR_DOMAIN,
        CODE_ELEMENT_NOT_FOUND,
        "Interaction cannot continue because the desired element was not found.",
    );
    record.element_matcher = Some("kindOfClass('UILabel')".into());
    record.hierarchy = Some("<UIWindow>\n  |--<UILabel: 'Welcome'> [AX]".into());

    let out = format_interaction_failure(&record).unwrap();

    let hierarchy_block = render_hierarchy(record.hierarchy.as_deref()).unwrap();
    let expected = format!(
        "Interaction cannot continue because the desired element was not found.\n\
         \n\
         Element Matcher:\nkindOfClass('UILabel')\n\
         \n\
         {hierarchy_block}\n"
    );
    assert_eq!(out, expected);
}
