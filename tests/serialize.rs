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

use rs_netflow::{EdgeView, JohnsonSolver, MaxFlowSolver, MinCostFlowSolver, Outcome};

use std::error::Error;

#[test]
fn test_residual_graph() -> Result<(), Box<dyn Error>> {
    let mut solver = JohnsonSolver::new(3, 0, 2)?;
    solver.add_edge_with_cost(0, 1, 4, 2)?;
    solver.add_edge_with_cost(1, 2, 3, -1)?;

    let graph = solver.residual_graph()?;
    let json = serde_json::to_string(&graph)?;
    let parsed: Vec<Vec<EdgeView<i64>>> = serde_json::from_str(&json)?;
    assert_eq!(parsed, graph);

    let first = serde_json::to_value(&graph[0][0])?;
    assert_eq!(first["from"], 0);
    assert_eq!(first["to"], 1);
    assert_eq!(first["flow"], 3);
    assert_eq!(first["remaining"], 1);
    assert_eq!(first["original_capacity"], 4);
    assert_eq!(first["cost"], 2);
    assert_eq!(first["residual"], false);
    Ok(())
}

#[test]
fn test_outcome() -> Result<(), Box<dyn Error>> {
    let mut solver = JohnsonSolver::new(3, 0, 2)?;
    solver.add_edge_with_cost(0, 1, 4, 2)?;
    solver.add_edge_with_cost(1, 2, 3, -1)?;
    assert_eq!(solver.max_flow()?, 3);

    let outcome = solver.outcome()?;
    assert_eq!(outcome, Outcome { value: 3, cost: 3 });
    let json = serde_json::to_string(&outcome)?;
    assert_eq!(json, r#"{"value":3,"cost":3}"#);
    assert_eq!(serde_json::from_str::<Outcome<i64>>(&json)?, outcome);
    Ok(())
}
