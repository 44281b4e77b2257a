/// Generate a template `.include-check.toml` for `--init`.
pub fn generate_init_template() -> String {
	r#"# include-check configuration
#
# Files are discovered from the current directory upwards; `root = true`
# stops the search at this file. Relative paths are resolved against the
# directory containing this file.
root = true

# Project POM whose <dependencies> the include patterns are checked against.
pom = "pom.xml"

# Assembly descriptors to check.
descriptors = [
    "src/assembly/dist.xml",
]

# Dependencies not declared in the POM (e.g. contributed by a parent).
# [[dependencies]]
# group_id = "org.example"
# artifact_id = "example-lib"
# classifier = "tests"
"#
	.to_string()
}
