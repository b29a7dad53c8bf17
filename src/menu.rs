use crate::arith::Op;
use crate::error::Result;
use crate::input::LineSource;

pub const ENTRIES: [(&str, &str); 5] = [
    ("1", "Add"),
    ("2", "Subtract"),
    ("3", "Multiply"),
    ("4", "Divide"),
    ("5", "Exit"),
];

pub fn text() -> &'static str {
    concat!(
        "\n",
        "--- Simple Calculator ---\n",
        "1. Add\n",
        "2. Subtract\n",
        "3. Multiply\n",
        "4. Divide\n",
        "5. Exit\n",
        "-------------------------"
    )
}

pub fn render<S>(out: &mut S) -> Result<()>
where
    S: LineSource + ?Sized,
{
    out.write_line(text())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Choice {
    Compute(Op),
    Exit,
    Invalid(String),
}

impl<'a> From<&'a str> for Choice {
    /// The token is matched as typed; surrounding spaces make it invalid.
    fn from(token: &'a str) -> Self {
        match token {
            "5" => Choice::Exit,
            _ => match Op::from_choice(token) {
                Some(op) => Choice::Compute(op),
                None => Choice::Invalid(token.into()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Prompter;
    use std::io::Cursor;

    #[test]
    fn renders_five_entries() {
        let mut out = Prompter::new(Cursor::new(&b""[..]), Vec::new());
        render(&mut out).unwrap();
        let text = String::from_utf8(out.take().1).unwrap();
        assert_eq!(
            text,
            "\n--- Simple Calculator ---\n1. Add\n2. Subtract\n3. Multiply\n\
             4. Divide\n5. Exit\n-------------------------\n"
        );
    }

    #[test]
    fn entries_match_text() {
        for (key, label) in ENTRIES.iter() {
            assert!(text().contains(&format!("\n{}. {}\n", key, label)));
        }
    }

    #[test]
    fn parses_choices() {
        assert_eq!(Choice::from("1"), Choice::Compute(Op::Add));
        assert_eq!(Choice::from("3"), Choice::Compute(Op::Multiply));
        assert_eq!(Choice::from("5"), Choice::Exit);
        assert_eq!(Choice::from("7"), Choice::Invalid("7".into()));
        assert_eq!(Choice::from("5 "), Choice::Invalid("5 ".into()));
        assert_eq!(Choice::from(""), Choice::Invalid(String::new()));
    }
}
