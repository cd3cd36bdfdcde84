use super::classify::{ClassifiedLine, LineType};

/// Consecutive non-empty lines between blank-line boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawBlock {
    pub lines: Vec<ClassifiedLine>,
}

impl RawBlock {
    /// Drops `Total : ...` summary lines.
    pub fn without_totals(mut self) -> Self {
        self.lines.retain(|line| !line.is_total_marker());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Groups classified lines into raw blocks, splitting on `Empty` lines.
pub fn split_into_raw_blocks(lines: impl IntoIterator<Item = ClassifiedLine>) -> Vec<RawBlock> {
    let mut blocks = Vec::new();
    let mut current = RawBlock::default();

    for line in lines {
        if line.line_type == LineType::Empty {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
            continue;
        }
        current.lines.push(line);
    }

    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}
