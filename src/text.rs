//! Plain-text rendering helpers shared by the report writers.

/// Title surrounded by a dash banner of the same width.
pub fn banner(title: &str) -> String {
    let rule = "-".repeat(title.chars().count());
    format!("{rule}\n{title}\n{rule}")
}

/// `"Title:     value"` with the title padded to ten columns.
pub fn entry(title: &str, value: &str) -> String {
    format!("{title:10} {value}")
}

/// Items numbered from 1, numbers right-aligned to the widest.
pub fn numbered_list(items: &[String]) -> Vec<String> {
    let width = items.len().to_string().len();
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{:>width$}. {item}", i + 1))
        .collect()
}

/// Lines right-justified to the longest one.
pub fn rjust_lines(lines: &[String]) -> Vec<String> {
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    lines.iter().map(|l| format!("{l:>width$}")).collect()
}

/// First character upper-cased, the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// First character upper-cased and the rest lower-cased.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// `1st`, `2nd`, `3rd`, `4th`, `11th`, `21st`, ...
pub fn ordinal(n: i64) -> String {
    let suffix = match (n.rem_euclid(100), n.rem_euclid(10)) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

const ONES: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const SCALES: [&str; 4] = ["", "thousand", "million", "billion"];

/// British-style cardinal: `123` is `"one hundred and twenty-three"`,
/// `1005` is `"one thousand and five"`, `2340` is
/// `"two thousand, three hundred and forty"`.
pub fn number_to_words(n: u64) -> String {
    if n == 0 {
        return ONES[0].to_string();
    }

    let mut groups = Vec::new();
    let mut rest = n;
    while rest > 0 {
        groups.push((rest % 1000) as usize);
        rest /= 1000;
    }

    let mut parts: Vec<String> = Vec::new();
    for (scale, &group) in groups.iter().enumerate().rev() {
        if group == 0 {
            continue;
        }
        let mut words = hundreds_to_words(group);
        if scale > 0 {
            words = format!("{words} {}", scale_name(scale));
        }
        parts.push(words);
    }

    // The last group joins with "and" when it has no hundreds of its own.
    let low = groups[0];
    if parts.len() > 1 && low > 0 && low < 100 {
        let last = parts.pop().unwrap_or_default();
        let head = parts.join(", ");
        return format!("{head} and {last}");
    }
    parts.join(", ")
}

fn scale_name(scale: usize) -> String {
    SCALES
        .get(scale)
        .map(|s| s.to_string())
        .unwrap_or_else(|| format!("e{}", scale * 3))
}

fn hundreds_to_words(n: usize) -> String {
    let hundreds = n / 100;
    let rest = n % 100;
    let tail = if rest == 0 {
        String::new()
    } else if rest < 20 {
        ONES[rest].to_string()
    } else if rest % 10 == 0 {
        TENS[rest / 10].to_string()
    } else {
        format!("{}-{}", TENS[rest / 10], ONES[rest % 10])
    };
    match (hundreds, tail.is_empty()) {
        (0, _) => tail,
        (h, true) => format!("{} hundred", ONES[h]),
        (h, false) => format!("{} hundred and {tail}", ONES[h]),
    }
}

/// `5` renders as `5`, `5.5` as `5.5`.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
