//! Path data readers shared by the integration tests

#![allow(dead_code)]

use cog_icon::IconConfig;

/// Pen positions visited by a path, paired with the command letter
pub fn pen_positions(d: &str) -> Vec<(char, f64, f64)> {
    let tokens: Vec<&str> = d.split(' ').collect();
    let mut out = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        let letter = tokens[i].chars().next().expect("empty token");
        let num = |k: usize| -> f64 {
            tokens[i + k]
                .parse()
                .unwrap_or_else(|_| panic!("bad number {:?}", tokens[i + k]))
        };
        match letter {
            'M' | 'L' => {
                out.push((letter, num(1), num(2)));
                i += 3;
            }
            'A' => {
                out.push((letter, num(6), num(7)));
                i += 8;
            }
            'Z' => i += 1,
            other => panic!("unexpected command {:?} in {}", other, d),
        }
    }
    out
}

/// True when every token is a command letter or a fixed-point number
pub fn is_plain_path_data(d: &str) -> bool {
    d.split(' ').all(|token| {
        let is_command = matches!(token, "M" | "L" | "A" | "Z");
        let is_plain_number = !token.is_empty()
            && token
                .chars()
                .all(|ch| ch.is_ascii_digit() || ch == '.' || ch == '-');
        is_command || is_plain_number
    })
}

/// Number of straight segments running along the outer circle
pub fn flat_top_count(d: &str, config: &IconConfig) -> usize {
    let c = config.size / 2.0;
    let r_outer = config.size * config.d1 / 2.0;
    // Serialized coordinates carry at most 0.0005 rounding per axis
    let on_outer =
        |x: f64, y: f64| ((x - c).hypot(y - c) - r_outer).abs() < 1e-3 * r_outer.max(1.0);

    pen_positions(d)
        .windows(2)
        .filter(|w| {
            let (_, x0, y0) = w[0];
            let (letter, x1, y1) = w[1];
            letter == 'L' && on_outer(x0, y0) && on_outer(x1, y1)
        })
        .count()
}
