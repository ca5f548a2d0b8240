#![cfg(feature = "serde")]
//! Serialization tests for the data types, using `serde_json`.

use forms::control::Either;
use forms::form_result::FormResult;
use forms::typeclass::{Max, Sum};
use rstest::rstest;

#[rstest]
fn form_result_serializes_as_struct() {
    let result = FormResult::new(vec!["required".to_string()], None::<u8>);
    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(json, r#"{"meta":["required"],"result":null}"#);
}

#[rstest]
fn form_result_round_trips() {
    let result = FormResult::new(Sum::new(2_u32), Some("ada".to_string()));
    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(json, r#"{"meta":2,"result":"ada"}"#);

    let decoded: FormResult<Sum<u32>, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, result);
}

#[rstest]
fn wrappers_are_transparent() {
    assert_eq!(serde_json::to_string(&Max::new(7)).unwrap(), "7");
    let decoded: Max<i32> = serde_json::from_str("-3").unwrap();
    assert_eq!(decoded, Max::new(-3));
}

#[rstest]
#[case(Either::Left(1), r#"{"Left":1}"#)]
#[case(Either::Right("x".to_string()), r#"{"Right":"x"}"#)]
fn either_uses_externally_tagged_variants(#[case] value: Either<i32, String>, #[case] expected: &str) {
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, expected);
    let decoded: Either<i32, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, value);
}

#[cfg(feature = "view")]
mod view {
    use forms::view::View;
    use rstest::rstest;

    #[rstest]
    fn view_round_trips() {
        let view = View::node("li", [View::text("required")]).with_prop("class", "error");
        let json = serde_json::to_string(&view).unwrap();
        assert_eq!(
            json,
            r#"{"Element":{"tag":{"Name":"li"},"props":{"class":"error"},"children":[{"Text":"required"}]}}"#
        );
        let decoded: View = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, view);
    }

    #[rstest]
    fn fragment_tag_is_a_unit_variant() {
        let json = serde_json::to_string(&View::empty()).unwrap();
        assert_eq!(json, r#"{"Element":{"tag":"Fragment","props":{},"children":[]}}"#);
    }

    #[rstest]
    fn nested_fragment_is_spliced_on_decode() {
        let json = r#"{"Element":{"tag":{"Name":"p"},"props":{},"children":[{"Element":{"tag":"Fragment","props":{"k":"v"},"children":[{"Text":"a"},{"Text":"b"}]}}]}}"#;
        let decoded: View = serde_json::from_str(json).unwrap();
        assert_eq!(decoded.to_string(), "<p{}>a,b</p>");
        assert_eq!(decoded, View::node("p", [View::text("a"), View::text("b")]));
    }

    #[rstest]
    fn fragment_props_are_dropped_on_decode() {
        let json = r#"{"Element":{"tag":"Fragment","props":{"k":"v"},"children":[{"Text":"a"}]}}"#;
        let decoded: View = serde_json::from_str(json).unwrap();
        assert_eq!(decoded.to_string(), "<#fragment{}>a</#fragment>");
    }
}
