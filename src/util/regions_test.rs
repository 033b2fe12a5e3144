use super::*;

#[test]
fn all_present_passes() {
    assert_eq!(check_regions(|_| true, REQUIRED_REGIONS), Ok(()));
}

#[test]
fn missing_region_is_named() {
    let err = check_regions(|s| s != ".skills_readmore", REQUIRED_REGIONS).expect_err("missing");
    assert_eq!(err, PageError::MissingRegion { name: ".skills_readmore".into() });
    assert_eq!(err.to_string(), "required page region missing: .skills_readmore");
}

#[test]
fn first_missing_region_wins() {
    let err = check_regions(|_| false, REQUIRED_REGIONS).expect_err("missing");
    assert_eq!(err, PageError::missing_region(".modal"));
}

#[test]
fn empty_requirement_list_passes() {
    assert_eq!(check_regions(|_| false, &[]), Ok(()));
}
