use maxflow_trace::{compute, verify, Error, MaxFlowSolver, Network, PushRelabel};
use proptest::prelude::*;

// Minimum over every cut that keeps the source on one side and the sink on the other. Summed
// in `i128` so cuts of near-maximal capacities do not overflow.
fn brute_force_min_cut(rows: &[Vec<i64>], source: usize, sink: usize) -> i128 {
    let n = rows.len();
    (0u32..1 << n)
        .filter(|set| set & (1 << source) != 0 && set & (1 << sink) == 0)
        .map(|set| {
            let inside = |x: usize| set & (1 << x) != 0;
            (0..n)
                .flat_map(|u| (0..n).map(move |v| (u, v)))
                .filter(|&(u, v)| inside(u) && !inside(v))
                .map(|(u, v)| i128::from(rows[u][v]))
                .sum::<i128>()
        })
        .min()
        .unwrap_or(0)
}

fn networks(
    capacity: impl Strategy<Value = i64> + Clone,
) -> impl Strategy<Value = (Vec<Vec<i64>>, usize, usize)> {
    (2usize..=7).prop_flat_map(move |n| {
        (
            prop::collection::vec(prop::collection::vec(capacity.clone(), n), n),
            0..n,
            0..n,
        )
    })
}

fn network() -> impl Strategy<Value = (Vec<Vec<i64>>, usize, usize)> {
    networks(prop_oneof![3 => Just(0i64), 2 => 1i64..20])
}

// Mixes in capacities at the very top of the `i64` range, so 2-cycles of them show up.
fn wide_network() -> impl Strategy<Value = (Vec<Vec<i64>>, usize, usize)> {
    networks(prop_oneof![
        4 => Just(0i64),
        3 => 1i64..20,
        2 => (i64::MAX - 4)..=i64::MAX,
    ])
}

proptest! {
    #[test]
    fn max_flow_equals_min_cut((rows, source, sink) in network()) {
        prop_assume!(source != sink);
        let solution = compute(&rows, source, sink).unwrap();
        prop_assert_eq!(
            i128::from(solution.max_flow()),
            brute_force_min_cut(&rows, source, sink)
        );
    }

    #[test]
    fn huge_capacities_overflow_only_when_the_value_does((rows, source, sink) in wide_network()) {
        prop_assume!(source != sink);
        let expected = brute_force_min_cut(&rows, source, sink);
        match compute(&rows, source, sink) {
            Ok(solution) => {
                prop_assert_eq!(i128::from(solution.max_flow()), expected);
                let network = Network::new(&rows).unwrap();
                let cut = solution.min_cut(&network, source).unwrap();
                prop_assert_eq!(cut.capacity, solution.max_flow());
            }
            Err(err) => {
                prop_assert_eq!(err, Error::ArithmeticOverflow);
                prop_assert!(expected > i128::from(i64::MAX));
            }
        }
    }

    #[test]
    fn flow_respects_invariants((rows, source, sink) in network()) {
        let network = Network::new(&rows).unwrap();
        let solution = compute(&rows, source, sink).unwrap();
        prop_assert_eq!(solution.flow().check(&network, source, sink), Ok(()));
        prop_assert_eq!(verify(&network, source, sink, &solution), Ok(()));
    }

    #[test]
    fn push_relabel_agrees((rows, source, sink) in network()) {
        let network = Network::new(&rows).unwrap();
        let solution = compute(&rows, source, sink).unwrap();
        let (value, _) = PushRelabel::new().max_flow(&network, source, sink).unwrap();
        prop_assert_eq!(solution.max_flow(), value);
    }

    #[test]
    fn trace_accounts_for_the_total((rows, source, sink) in network()) {
        let solution = compute(&rows, source, sink).unwrap();
        let trace = solution.trace();

        let mut running = 0;
        for (i, iteration) in trace.iter().enumerate() {
            prop_assert_eq!(iteration.step, i + 1);
            prop_assert!(iteration.bottleneck > 0);
            prop_assert_eq!(iteration.added, iteration.bottleneck);
            prop_assert_eq!(iteration.path.first().map(|n| n.index()), Some(source));
            prop_assert_eq!(iteration.path.last().map(|n| n.index()), Some(sink));
            prop_assert_eq!(iteration.updates.len(), iteration.path.len() - 1);
            running += iteration.bottleneck;
            prop_assert_eq!(iteration.total, running);
        }
        prop_assert_eq!(solution.max_flow(), running);
        if source == sink {
            prop_assert!(trace.is_empty());
        }
    }

    #[test]
    fn runs_are_deterministic((rows, source, sink) in network()) {
        prop_assert_eq!(compute(&rows, source, sink), compute(&rows, source, sink));
    }
}
