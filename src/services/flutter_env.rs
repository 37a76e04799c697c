use std::collections::BTreeMap;

/// A group of variables rendered under a comment header.
pub struct EnvSection {
    pub comments: &'static [&'static str],
    /// `(key, default)` pairs in output order.
    pub entries: &'static [(&'static str, &'static str)],
}

/// Variables exposed to the embedded client as a `.env` file.
pub const ENV_SECTIONS: &[EnvSection] = &[
    EnvSection {
        comments: &["GoKwik Configuration"],
        entries: &[
            ("GOKWIK_MERCHANT_ID", "19w2ztg5723j"),
            ("GOKWIK_API_KEY", ""),
            ("GOKWIK_ENVIRONMENT", "sandbox"),
        ],
    },
    EnvSection {
        comments: &["Sanity Configuration"],
        entries: &[
            ("SANITY_PROJECT_ID", "jh7llku7"),
            ("SANITY_DATASET", "production"),
        ],
    },
    EnvSection {
        comments: &["App Configuration"],
        entries: &[("APP_NAME", "Design Wear"), ("DEBUG_MODE", "true")],
    },
    EnvSection {
        comments: &[
            "Google AI Studio - Gemini API (Virtual Try-On)",
            "Get your API key from: https://aistudio.google.com/apikey",
        ],
        entries: &[("GEMINI_API_KEY", "")],
    },
    EnvSection {
        comments: &["Firebase Configuration"],
        entries: &[
            ("FIREBASE_PROJECT_ID", "designwear-app-8984"),
            ("FIREBASE_MESSAGING_SENDER_ID", "653328426569"),
            (
                "FIREBASE_STORAGE_BUCKET",
                "designwear-app-8984.firebasestorage.app",
            ),
        ],
    },
    EnvSection {
        comments: &["Web/Windows"],
        entries: &[
            ("FIREBASE_WEB_API_KEY", ""),
            ("FIREBASE_WEB_APP_ID", ""),
            ("FIREBASE_WINDOWS_APP_ID", ""),
        ],
    },
    EnvSection {
        comments: &["Android"],
        entries: &[("FIREBASE_ANDROID_API_KEY", ""), ("FIREBASE_ANDROID_APP_ID", "")],
    },
    EnvSection {
        comments: &["iOS/macOS"],
        entries: &[("FIREBASE_IOS_API_KEY", ""), ("FIREBASE_IOS_APP_ID", "")],
    },
];

/// Every variable name the `.env` export knows about.
pub fn exported_keys() -> impl Iterator<Item = &'static str> {
    ENV_SECTIONS
        .iter()
        .flat_map(|section| section.entries.iter().map(|(key, _)| *key))
}

/// Render the `.env` file, substituting the literal default for unset keys.
pub fn render_env_file(values: &BTreeMap<String, String>) -> String {
    let mut out = String::new();

    for (index, section) in ENV_SECTIONS.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        for comment in section.comments {
            out.push_str("# ");
            out.push_str(comment);
            out.push('\n');
        }
        for (key, default) in section.entries {
            let value = values
                .get(*key)
                .map(String::as_str)
                .filter(|value| !value.is_empty())
                .unwrap_or(*default);
            out.push_str(key);
            out.push('=');
            out.push_str(value);
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(rendered: &str) -> Vec<&str> {
        rendered
            .lines()
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect()
    }

    #[test]
    fn every_key_is_present_with_defaults() {
        let rendered = render_env_file(&BTreeMap::new());
        let lines = lines(&rendered);

        assert_eq!(lines.len(), exported_keys().count());
        for key in exported_keys() {
            assert!(
                lines.iter().any(|line| line.starts_with(&format!("{key}="))),
                "missing {key}"
            );
        }
        assert!(lines.contains(&"GOKWIK_MERCHANT_ID=19w2ztg5723j"));
        assert!(lines.contains(&"SANITY_PROJECT_ID=jh7llku7"));
        assert!(lines.contains(&"APP_NAME=Design Wear"));
        assert!(lines.contains(&"GEMINI_API_KEY="));
    }

    #[test]
    fn configured_values_override_defaults() {
        let mut values = BTreeMap::new();
        values.insert("SANITY_DATASET".to_string(), "staging".to_string());
        values.insert("GEMINI_API_KEY".to_string(), "key-1".to_string());

        let rendered = render_env_file(&values);
        let lines = lines(&rendered);

        assert!(lines.contains(&"SANITY_DATASET=staging"));
        assert!(lines.contains(&"GEMINI_API_KEY=key-1"));
        assert!(lines.contains(&"SANITY_PROJECT_ID=jh7llku7"));
    }

    #[test]
    fn sections_start_with_comment_headers() {
        let rendered = render_env_file(&BTreeMap::new());

        assert!(rendered.starts_with("# GoKwik Configuration\nGOKWIK_MERCHANT_ID="));
        assert!(rendered.contains("\n\n# Firebase Configuration\n"));
    }
}
