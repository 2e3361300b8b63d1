use crate::structs::Genotype;

/// Majority genotype of the calls, ignoring missing values.
///
/// Returns `Genotype::Missing` when nothing is called or when the two most common calls are
/// tied.
pub fn consensus<'a, I>(values: I) -> Genotype
where
    I: IntoIterator<Item = &'a Genotype>,
{
    let mut tally = [(Genotype::A, 0usize), (Genotype::B, 0), (Genotype::H, 0)];

    for value in values {
        match value {
            Genotype::A => tally[0].1 += 1,
            Genotype::B => tally[1].1 += 1,
            Genotype::H => tally[2].1 += 1,
            Genotype::Missing => (),
        }
    }

    tally.sort_by(|a, b| b.1.cmp(&a.1));

    let (top, top_count) = tally[0];
    let runner_up_count = tally[1].1;

    if top_count == 0 || top_count == runner_up_count {
        Genotype::Missing
    } else {
        top
    }
}
