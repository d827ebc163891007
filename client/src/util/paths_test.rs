use super::*;

#[test]
fn handle_prefixes_username() {
    assert_eq!(handle(Some("ferris")), "@ferris");
}

#[test]
fn profile_path_uses_handle() {
    assert_eq!(profile_path(Some("ferris")), "/@ferris");
}

#[test]
fn missing_username_leaves_empty_segment() {
    assert_eq!(handle(None), "@");
    assert_eq!(profile_path(None), "/@");
    assert_eq!(avatar_alt(None), "@'s profile picture");
}

#[test]
fn post_path_embeds_id() {
    assert_eq!(post_path("clx0abc"), "/post/clx0abc");
}

#[test]
fn avatar_alt_names_the_author() {
    assert_eq!(avatar_alt(Some("ferris")), "@ferris's profile picture");
}
