use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ProjectorError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ProjectorError::config("x")
            .to_string()
            .contains("config error:")
    );
    assert!(
        ProjectorError::script("x")
            .to_string()
            .contains("input script error:")
    );
    assert!(
        ProjectorError::render("x")
            .to_string()
            .contains("render error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ProjectorError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
