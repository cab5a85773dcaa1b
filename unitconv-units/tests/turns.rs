//! End-to-end turns through the public entry point

use unitconv_units::handle_turn;

#[test]
fn converts_lengths() {
    assert_eq!(handle_turn("1 km to m"), "1.0 kilometer is 1000.0 meters");
    assert_eq!(handle_turn("3 miles to yards"), "3.0 miles is 5280.0196850393695 yards");
    assert_eq!(handle_turn("1000 M IN KM"), "1000.0 meters is 1.0 kilometer");
}

#[test]
fn converts_weights() {
    assert_eq!(handle_turn("2 kg to g"), "2.0 kilograms is 2000.0 grams");
    assert_eq!(handle_turn("1000 mg to g"), "1000.0 milligrams is 1.0 gram");
}

#[test]
fn converts_temperatures() {
    assert_eq!(
        handle_turn("0 celsius to fahrenheit"),
        "0.0 degrees Celsius is 32.0 degrees Fahrenheit"
    );
    assert_eq!(
        handle_turn("100 degrees celsius to f"),
        "100.0 degrees Celsius is 212.0 degrees Fahrenheit"
    );
    assert_eq!(
        handle_turn("32 f to degrees celsius"),
        "32.0 degrees Fahrenheit is 0.0 degrees Celsius"
    );
    assert_eq!(
        handle_turn("0 degrees celsius in degrees kelvin"),
        "Conversion from degrees Celsius to ??? is impossible"
    );
    assert_eq!(handle_turn("1 c to k"), "1.0 degree Celsius is 274.15 kelvins");
}

#[test]
fn rejects_incompatible_measures() {
    assert_eq!(handle_turn("5 km to kg"), "Conversion from kilometers to kilograms is impossible");
    assert_eq!(
        handle_turn("5 degrees celsius to pounds"),
        "Conversion from degrees Celsius to pounds is impossible"
    );
}

#[test]
fn rejects_unknown_units() {
    assert_eq!(handle_turn("5 furlongs to m"), "Conversion from ??? to meters is impossible");
    assert_eq!(handle_turn("5 m to furlongs"), "Conversion from meters to ??? is impossible");
    assert_eq!(handle_turn("5 parsecs to furlongs"), "Conversion from ??? to ??? is impossible");
}

#[test]
fn rejects_out_of_domain_amounts() {
    assert_eq!(handle_turn("-5 m to km"), "Length shouldn't be negative");
    assert_eq!(handle_turn("-1 oz to g"), "Weight shouldn't be negative");
    assert_eq!(handle_turn("-300 c to k"), "Temperature shouldn't be negative");
    assert_eq!(
        handle_turn("-273.15 c to k"),
        "-273.15 degrees Celsius is 0.0 kelvins"
    );
}

#[test]
fn rejects_unparseable_input() {
    assert_eq!(handle_turn("abc m to km"), "Parse error");
    assert_eq!(handle_turn(""), "Parse error");
    assert_eq!(handle_turn("10 km"), "Parse error");
    assert_eq!(handle_turn("10 a b c d e f"), "Parse error");
}
