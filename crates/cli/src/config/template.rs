// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Starter configuration written by `brandscope init`.

/// Default brands.yml content.
pub const DEFAULT_CONFIG: &str = r#"# Canonical brand names.
brands:
  - Samsung
  - Apple
  - Google
  - OnePlus
  - Xiaomi
  - Huawei
  - LG
  - Sony
  - Dell

# Alias -> canonical brand. Keys are matched case-insensitively.
aliases:
  samsung: Samsung
  galaxy: Samsung
  z fold: Samsung
  fold: Samsung
  apple: Apple
  iphone: Apple
  ipad: Apple
  google: Google
  pixel: Google
  oneplus: OnePlus
  xiaomi: Xiaomi
  mi: Xiaomi
  redmi: Xiaomi
  huawei: Huawei
  lg: LG
  sony: Sony
  dell: Dell

# Checked first, in order. The first pattern found anywhere in the text wins.
regex_hints:
  - pattern: '\bgalaxy\s+(z\s+)?(fold|flip)\s*\d*\b'
    brand: Samsung
  - pattern: '\biphone\s*\d+'
    brand: Apple

thresholds:
  ner_min_conf: 0.70
  fuzzy_min_score: 86
"#;

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
