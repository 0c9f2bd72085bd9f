//! Coverage, totality, and idempotence properties over adversarial inputs.

use glint::{Analyzer, LanguageTag};
use pretty_assertions::assert_eq;

const ALL_TAGS: &[LanguageTag] = &[
    LanguageTag::Ts,
    LanguageTag::Tsx,
    LanguageTag::Js,
    LanguageTag::Jsx,
    LanguageTag::Json,
    LanguageTag::Css,
    LanguageTag::Md,
    LanguageTag::Text,
];

fn assert_coverage(analyzer: &Analyzer, content: &str, language: Option<LanguageTag>) {
    let analysis = analyzer.analyze(content, language);
    for line in analysis.lines() {
        let rebuilt: String = line.tokens().iter().map(|t| t.text).collect();
        assert_eq!(
            rebuilt,
            line.text(),
            "coverage broken for {language:?} line {}",
            line.number()
        );
    }
}

#[test]
fn test_coverage_over_adversarial_lines() {
    let analyzer = Analyzer::new().unwrap();
    let content = concat!(
        "\n",
        "   \n",
        "\t\t\t\n",
        "const App: React.FC<AppProps> = ({ title, theme = 'dark' }) => {\n",
        "\"unclosed: \n",
        "'''\n",
        "`${}`\n",
        "/* unclosed block\n",
        "<<<>>><A><b></B></c>\n",
        "0 1.5 2. .3 007\n",
        "你好 👨‍👩‍👧‍👦 \u{301} \u{3000}\n",
        "{\"k\": \"v\", \"n\": 1, bad: 'x'}\n",
        "!@#$%^&*()_+-=[]{}|;:,.<>?/~\n",
    );

    for &tag in ALL_TAGS {
        assert_coverage(&analyzer, content, Some(tag));
    }
    assert_coverage(&analyzer, content, None);
}

#[test]
fn test_totality_on_pathological_line_lengths() {
    let analyzer = Analyzer::new().unwrap();

    // A single line well past 10k characters, in each mode.
    let long_plain = "z".repeat(12_000);
    let long_mixed = "const x = 'y'; foo(); ".repeat(600);
    let long_json = "\"k\": 1, ".repeat(1_500);

    for &tag in ALL_TAGS {
        assert_coverage(&analyzer, &long_plain, Some(tag));
        assert_coverage(&analyzer, &long_mixed, Some(tag));
        assert_coverage(&analyzer, &long_json, Some(tag));
    }
}

#[test]
fn test_idempotence_bit_identical_reruns() {
    let analyzer = Analyzer::new().unwrap();
    let content = "const a = 1\n  console.log(a);\nfoo(a, b))\nlet s = 'open\n";

    for &tag in ALL_TAGS {
        let first = analyzer.analyze(content, Some(tag));
        let second = analyzer.analyze(content, Some(tag));

        assert_eq!(first.diagnostics(), second.diagnostics());
        assert_eq!(first.line_count(), second.line_count());
        for (a, b) in first.lines().zip(second.lines()) {
            assert_eq!(a, b);
        }
    }
}

#[test]
fn test_tokens_never_empty_except_json_empty_line() {
    let analyzer = Analyzer::new().unwrap();
    let analysis = analyzer.analyze("a\n\nb", Some(LanguageTag::Ts));
    // Code mode: the empty line yields zero tokens.
    assert!(analysis.line_tokens(2).unwrap().is_empty());

    let analysis = analyzer.analyze("a\n\nb", Some(LanguageTag::Json));
    // JSON mode: one empty plain token.
    let tokens = analysis.line_tokens(2).unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].text, "");
}
