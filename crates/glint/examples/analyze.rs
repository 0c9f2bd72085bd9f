//! Analyze an embedded sample file and print its tokens and diagnostics.
//!
//! Run with: `cargo run -p glint --example analyze`

use glint::{Analyzer, LanguageTag, Severity, TokenClass, measure};

const FILE_NAME: &str = "App.tsx";

const SOURCE: &str = r#"import React from "react";

const App = ({ title }: AppProps) => {
  const count = 5
  console.log(count);
  const theme: any = 'dark
  return (
    <div className="app">
      <Header title={title} />
    </div>
  );
};

export default App;
"#;

fn main() {
    let language = LanguageTag::from_file_name(FILE_NAME);
    let analyzer = Analyzer::new().expect("engine patterns are fixed and compile");
    let analysis = analyzer.analyze(SOURCE, language);

    println!(
        "=== {} ({}) ===\n",
        FILE_NAME,
        language.map_or("Unknown", LanguageTag::display_name)
    );

    for line in analysis.lines() {
        print!("{:>3} | ", line.number());
        for token in line.tokens() {
            match token.class {
                TokenClass::Plain => print!("{}", token.text),
                class => print!("[{}:{:?}]", token.text, class),
            }
        }
        println!();

        for diagnostic in analysis.diagnostics_on_line(line.number()) {
            let marker = match diagnostic.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };
            let x = measure::column_to_cell_offset(line.text(), diagnostic.start_col);
            println!(
                "    | {:width$}^ {} ({}, cols {}..{})",
                "",
                diagnostic.message,
                marker,
                diagnostic.start_col,
                diagnostic.end_col,
                width = x
            );
        }
    }

    let (errors, warnings) = analysis.diagnostic_index().severity_counts();
    println!("\n{} error(s), {} warning(s)", errors, warnings);
}
