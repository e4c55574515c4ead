//! Table-driven heuristic risk analysis for reconstructed script text.
//!
//! Three declarative rule tables are evaluated uniformly against the whole
//! content: startup indicators, security concerns with a severity each, and
//! obfuscation idioms. Every rule is data, not a branch, so each one is
//! independently testable. The analyzer is pure and stateless.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use serde::Serialize;

/// Ordered heuristic risk grade for one reconstructed text resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
	/// No concerning patterns matched.
	Safe,
	/// Only low-severity patterns matched.
	Low,
	/// A medium-severity or obfuscation pattern matched.
	Medium,
	/// A high-severity pattern matched.
	High,
}

impl RiskLevel {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Safe => "safe",
			Self::Low => "low",
			Self::Medium => "medium",
			Self::High => "high",
		}
	}
}

/// Result of analyzing one text resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
	/// Whether any startup-indicator pattern matched.
	pub is_startup: bool,
	/// Matched startup reasons, in table order.
	pub startup_reasons: Vec<String>,
	/// Highest severity reached across all matched rules.
	pub risk_level: RiskLevel,
	/// Matched warnings, security entries before obfuscation entries.
	pub warnings: Vec<String>,
}

impl RiskAssessment {
	fn all_safe() -> Self {
		Self {
			is_startup: false,
			startup_reasons: Vec::new(),
			risk_level: RiskLevel::Safe,
			warnings: Vec::new(),
		}
	}
}

struct StartupRule {
	pattern: &'static str,
	reason: &'static str,
}

struct SecurityRule {
	pattern: &'static str,
	reason: &'static str,
	severity: RiskLevel,
}

struct ObfuscationRule {
	pattern: &'static str,
	reason: &'static str,
}

const STARTUP_RULES: [StartupRule; 9] = [
	StartupRule {
		pattern: r#"if\s+__name__\s*==\s*["']__main__["']"#,
		reason: "Main execution block present",
	},
	StartupRule {
		pattern: r"bpy\.app\.handlers\.\w+\.append",
		reason: "Event handler registration",
	},
	StartupRule {
		pattern: r"register\(\)",
		reason: "Register function call",
	},
	StartupRule {
		pattern: r"def\s+register\s*\(",
		reason: "Register function definition",
	},
	StartupRule {
		pattern: r"@persistent",
		reason: "Persistent decorator usage",
	},
	StartupRule {
		pattern: r"bpy\.utils\.register_class",
		reason: "Class registration",
	},
	StartupRule {
		pattern: r"addon_info\s*=",
		reason: "Addon metadata structure",
	},
	StartupRule {
		pattern: r"bl_info\s*=",
		reason: "Blender addon metadata",
	},
	StartupRule {
		pattern: r"bpy\.ops\.\w+\.\w+\(\)",
		reason: "Direct operator execution",
	},
];

const SECURITY_RULES: [SecurityRule; 11] = [
	SecurityRule {
		pattern: r"\beval\s*\(",
		reason: "Dynamic code execution (eval)",
		severity: RiskLevel::High,
	},
	SecurityRule {
		pattern: r"\bexec\s*\(",
		reason: "Dynamic code execution (exec)",
		severity: RiskLevel::High,
	},
	SecurityRule {
		pattern: r"os\.system\s*\(",
		reason: "System command execution",
		severity: RiskLevel::High,
	},
	SecurityRule {
		pattern: r"subprocess\.\w+",
		reason: "Process execution capabilities",
		severity: RiskLevel::Medium,
	},
	SecurityRule {
		pattern: r"import\s+subprocess",
		reason: "Subprocess module imported",
		severity: RiskLevel::Medium,
	},
	SecurityRule {
		pattern: r"__import__\s*\(",
		reason: "Dynamic module import",
		severity: RiskLevel::Medium,
	},
	SecurityRule {
		pattern: r"base64\.decode|base64\.b64decode",
		reason: "Base64 data decoding",
		severity: RiskLevel::Medium,
	},
	SecurityRule {
		pattern: r"urllib\.|requests\.|http\.|fetch",
		reason: "Network communication",
		severity: RiskLevel::Medium,
	},
	SecurityRule {
		pattern: r#"open\s*\([^)]*["'][wa]["']"#,
		reason: "File system writes",
		severity: RiskLevel::Low,
	},
	SecurityRule {
		pattern: r"\.decode\s*\(",
		reason: "Data decoding operations",
		severity: RiskLevel::Low,
	},
	SecurityRule {
		pattern: r"chr\s*\(|ord\s*\(",
		reason: "Character encoding operations",
		severity: RiskLevel::Low,
	},
];

const OBFUSCATION_RULES: [ObfuscationRule; 5] = [
	ObfuscationRule {
		pattern: r#"["'].{20,}["'].*\.decode"#,
		reason: "Encoded strings with decode",
	},
	ObfuscationRule {
		pattern: r#"["'][A-Za-z0-9+/]{20,}={0,2}["']"#,
		reason: "Base64-like strings",
	},
	ObfuscationRule {
		pattern: r"\\x[0-9a-fA-F]{2}",
		reason: "Hex encoded strings",
	},
	ObfuscationRule {
		pattern: r"join\s*\(\s*.*split",
		reason: "String splitting/joining obfuscation",
	},
	ObfuscationRule {
		pattern: r"chr\s*\(\s*\d+\s*\)",
		reason: "Character code obfuscation",
	},
];

static STARTUP_MATCHERS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(STARTUP_RULES.iter().map(|rule| rule.pattern)));
static SECURITY_MATCHERS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(SECURITY_RULES.iter().map(|rule| rule.pattern)));
static OBFUSCATION_MATCHERS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(OBFUSCATION_RULES.iter().map(|rule| rule.pattern)));

fn compile<'a>(patterns: impl Iterator<Item = &'a str>) -> Vec<Regex> {
	patterns
		.map(|pattern| {
			RegexBuilder::new(pattern)
				.case_insensitive(true)
				.build()
				.expect("rule table pattern compiles")
		})
		.collect()
}

/// Analyze one reconstructed text for startup and risk indicators.
///
/// Pure and deterministic: identical content always yields an identical
/// assessment. Each pattern is tested once against the whole content, so
/// repeated occurrences never duplicate an entry, and the risk level only
/// ever escalates as rules match.
pub fn analyze_script(content: &str) -> RiskAssessment {
	if content.is_empty() {
		return RiskAssessment::all_safe();
	}

	let mut assessment = RiskAssessment::all_safe();

	for (rule, matcher) in STARTUP_RULES.iter().zip(STARTUP_MATCHERS.iter()) {
		if matcher.is_match(content) {
			assessment.startup_reasons.push(rule.reason.to_owned());
		}
	}
	assessment.is_startup = !assessment.startup_reasons.is_empty();

	for (rule, matcher) in SECURITY_RULES.iter().zip(SECURITY_MATCHERS.iter()) {
		if matcher.is_match(content) {
			assessment.warnings.push(rule.reason.to_owned());
			if rule.severity > assessment.risk_level {
				assessment.risk_level = rule.severity;
			}
		}
	}

	for (rule, matcher) in OBFUSCATION_RULES.iter().zip(OBFUSCATION_MATCHERS.iter()) {
		if matcher.is_match(content) {
			assessment.warnings.push(format!("Obfuscation: {}", rule.reason));
			if assessment.risk_level < RiskLevel::Medium {
				assessment.risk_level = RiskLevel::Medium;
			}
		}
	}

	assessment
}
