pub mod generate_field;
