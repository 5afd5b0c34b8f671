/*
 * Copyright (c) 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Properties every flow computed by any of the solvers must satisfy.

use rs_netflow::maxflow::{CapacityScaling, Dinic, EdmondsKarp, FordFulkerson, PushRelabel, ScalingSearch};
use rs_netflow::mcf::{BellmanFord, Johnson};
use rs_netflow::{Algorithm, FlowNetwork, MaxFlowSolver, MinCostFlowSolver, Solver};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use std::error::Error;

struct Instance {
    n: usize,
    src: usize,
    snk: usize,
    edges: Vec<(usize, usize, i64, i64)>,
}

fn random_instance(rng: &mut StdRng) -> Instance {
    let n = rng.random_range(2..30);
    let m = rng.random_range(0..5 * n);
    let src = rng.random_range(0..n);
    let snk = (src + rng.random_range(1..n)) % n;
    let max_cap = if rng.random_bool(0.5) { 10 } else { 1000 };
    let edges = (0..m)
        .map(|_| {
            (
                rng.random_range(0..n),
                rng.random_range(0..n),
                rng.random_range(0..=max_cap),
                rng.random_range(0..20),
            )
        })
        .collect();
    Instance { n, src, snk, edges }
}

/// Check capacity bounds, residual conservation and flow conservation.
fn check_network(net: &FlowNetwork<i64>, src: usize, snk: usize, value: i64) {
    for e in 0..net.num_arcs() {
        let edge = net.edge(e);
        let rev = net.edge(net.reverse(e));
        assert_eq!(rev.from(), edge.to());
        assert_eq!(rev.to(), edge.from());
        assert!(0 <= net.flow(e) && net.flow(e) <= edge.original_capacity());
        assert_eq!(
            edge.remaining() + rev.remaining(),
            edge.original_capacity() + rev.original_capacity()
        );
    }
    for u in 0..net.num_nodes() {
        let expected = if u == src {
            -value
        } else if u == snk {
            value
        } else {
            0
        };
        assert_eq!(net.excess(u), expected);
    }
}

/// Solve the instance as max flow problem and return the flow value.
fn solve<A>(inst: &Instance, algorithm: A) -> Result<i64, Box<dyn Error>>
where
    A: Algorithm<i64>,
{
    let mut solver = Solver::with_algorithm(inst.n, inst.src, inst.snk, algorithm)?;
    for &(u, v, cap, _) in &inst.edges {
        solver.add_edge(u, v, cap)?;
    }

    let value = solver.max_flow()?;
    check_network(solver.graph()?, inst.src, inst.snk, value);

    // max-flow min-cut
    let mincut = solver.mincut()?;
    let mut in_cut = vec![false; inst.n];
    for &u in &mincut {
        in_cut[u] = true;
    }
    assert!(in_cut[inst.src] && !in_cut[inst.snk]);
    let cut: i64 = inst
        .edges
        .iter()
        .filter(|&&(u, v, _, _)| in_cut[u] && !in_cut[v])
        .map(|&(_, _, cap, _)| cap)
        .sum();
    assert_eq!(cut, value, "{}", A::NAME);

    // accessors do not solve again
    let snapshot = solver.residual_graph()?;
    assert_eq!(solver.max_flow()?, value);
    assert_eq!(solver.residual_graph()?, snapshot);

    Ok(value)
}

/// Solve the instance as min cost flow problem and return value and cost.
fn solve_mincost<A>(inst: &Instance) -> Result<(i64, i64), Box<dyn Error>>
where
    A: Algorithm<i64>,
    Solver<A, i64>: MinCostFlowSolver<i64>,
{
    let mut solver = Solver::<A, i64>::new(inst.n, inst.src, inst.snk)?;
    for &(u, v, cap, cost) in &inst.edges {
        solver.add_edge_with_cost(u, v, cap, cost)?;
    }
    let value = solver.max_flow()?;
    let cost = solver.min_cost()?;
    check_network(solver.graph()?, inst.src, inst.snk, value);

    let net = solver.graph()?;
    let total: i64 = (0..net.num_edges())
        .map(|i| {
            let e = 2 * i;
            net.flow(e) * net.edge(e).cost()
        })
        .sum();
    assert_eq!(total, cost);

    Ok((value, cost))
}

#[test]
fn test_random_agreement() -> Result<(), Box<dyn Error>> {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut rng = StdRng::seed_from_u64(20221017);

    for _ in 0..100 {
        let inst = random_instance(&mut rng);

        let value = solve(&inst, Dinic::default())?;
        assert_eq!(solve(&inst, FordFulkerson::default())?, value);
        assert_eq!(solve(&inst, EdmondsKarp::default())?, value);
        assert_eq!(solve(&inst, CapacityScaling::default())?, value);
        let mut scaling = CapacityScaling::default();
        scaling.search = ScalingSearch::BreadthFirst;
        assert_eq!(solve(&inst, scaling)?, value);
        assert_eq!(solve(&inst, PushRelabel::default())?, value);
        let mut pushrelabel = PushRelabel::default();
        pushrelabel.use_global_relabelling = false;
        assert_eq!(solve(&inst, pushrelabel)?, value);

        let (bf_value, bf_cost) = solve_mincost::<BellmanFord<i64>>(&inst)?;
        let (j_value, j_cost) = solve_mincost::<Johnson<i64>>(&inst)?;
        assert_eq!(bf_value, value);
        assert_eq!(j_value, value);
        assert_eq!(bf_cost, j_cost);
    }

    Ok(())
}

#[test]
fn test_large_capacities() -> Result<(), Box<dyn Error>> {
    // a long chain of large capacities next to a cheap shortcut
    let n = 50;
    let mut inst = Instance {
        n,
        src: 0,
        snk: n - 1,
        edges: vec![],
    };
    for u in 0..n - 1 {
        inst.edges.push((u, u + 1, 1 << 40, 1));
    }
    inst.edges.push((0, n - 1, 1, 100));
    inst.edges.push((n / 2, 1, 1 << 30, 0));

    let expected = (1 << 40) + 1;
    assert_eq!(solve(&inst, Dinic::default())?, expected);
    assert_eq!(solve(&inst, EdmondsKarp::default())?, expected);
    assert_eq!(solve(&inst, CapacityScaling::default())?, expected);
    assert_eq!(solve(&inst, PushRelabel::default())?, expected);

    let cost = (1i64 << 40) * (n as i64 - 1) + 100;
    assert_eq!(solve_mincost::<Johnson<i64>>(&inst)?, (expected, cost));
    assert_eq!(solve_mincost::<BellmanFord<i64>>(&inst)?, (expected, cost));
    Ok(())
}
