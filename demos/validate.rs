//! Fragment Validation Example
//!
//! This example demonstrates how to validate markup fragments against a
//! schema literal.
//!
//! Run with: cargo run --example validate

use domschema::markup;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Build the schema once from a literal.
    let schema = markup::parse_schema(
        r#"
        <Schema>
            <Element name="article">
                <Element name="h1|h2"/>
                <Element name="p"/>
            </Element>
        </Schema>
        "#,
    )?;
    println!("Schema loaded successfully!\n");

    // Validate a conforming fragment
    let valid = "<article><h1/><p/></article>";
    println!("Validating: {}", valid);
    let fragment = markup::parse_fragment(valid)?;
    match schema.validate_fragment(&fragment) {
        Ok(()) => println!("  Result: Fragment is valid!\n"),
        Err(failure) => println!("  Result: {}\n", failure),
    }

    // Validate a fragment with the wrong heading
    let invalid = "<article><h3/><p/></article>";
    println!("Validating: {}", invalid);
    let fragment = markup::parse_fragment(invalid)?;
    match schema.validate_fragment(&fragment) {
        Ok(()) => println!("  Result: Fragment is valid!\n"),
        Err(failure) => println!("  Result: {}\n", failure),
    }

    // Validate a fragment with a missing paragraph
    let missing = "<article><h1/></article>";
    println!("Validating: {}", missing);
    let fragment = markup::parse_fragment(missing)?;
    match schema.validate_fragment(&fragment) {
        Ok(()) => println!("  Result: Fragment is valid!"),
        Err(failure) => println!("  Result: {}", failure),
    }

    Ok(())
}
