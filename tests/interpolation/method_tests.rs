use monocubic::interpolation::errors::InterpolationError;
use monocubic::interpolation::Method;

#[test]
fn parse_is_case_insensitive() {
    let cases = [
        ("linear", Method::Linear),
        ("FiniteDifference", Method::FiniteDifference),
        ("CARDINAL", Method::Cardinal),
        ("fritschCarlson", Method::FritschCarlson),
        ("FritschButland", Method::FritschButland),
        (" steffen ", Method::Steffen),
    ];
    for (tag, expected) in cases {
        let got: Method = tag.parse().unwrap();
        assert_eq!(got, expected, "tag {:?}", tag);
    }
}

#[test]
fn display_round_trips_through_parse() {
    for method in Method::ALL {
        let parsed: Method = method.to_string().parse().unwrap();
        assert_eq!(parsed, method);
    }
}

#[test]
fn unknown_tag_rejected_by_strict_parse() {
    let err = "akima".parse::<Method>().unwrap_err();
    assert!(matches!(err, InterpolationError::UnknownMethod { ref got } if got == "akima"));
}

#[test]
fn unknown_tag_reported_trimmed() {
    let err = "  akima \t".parse::<Method>().unwrap_err();
    assert!(matches!(err, InterpolationError::UnknownMethod { ref got } if got == "akima"));
}

#[test]
fn unknown_tag_falls_back_when_lenient() {
    assert_eq!(Method::parse_lenient("akima"), Method::FiniteDifference);
    assert_eq!(Method::parse_lenient(""), Method::FiniteDifference);
    assert_eq!(Method::parse_lenient("Steffen"), Method::Steffen);
}

#[test]
fn default_is_finite_difference() {
    assert_eq!(Method::default(), Method::FiniteDifference);
}

#[test]
fn only_cardinal_reads_tension() {
    for method in Method::ALL {
        assert_eq!(method.uses_tension(), method == Method::Cardinal);
    }
}

#[test]
fn monotone_preserving_methods() {
    let preserving: Vec<Method> = Method::ALL
        .into_iter()
        .filter(|m| m.is_monotone_preserving())
        .collect();
    assert_eq!(
        preserving,
        vec![Method::FritschCarlson, Method::FritschButland, Method::Steffen]
    );
}
