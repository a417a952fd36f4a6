use super::EdgeList;
use crate::{
    error::{Err, Result},
    types::EdgeDef,
};
use itertools::Itertools;
use pest::{iterators::Pair, Parser};
use pest_derive::Parser;
use std::str::FromStr;

pub type InputRule = Rule;

#[derive(Parser)]
#[grammar = "front_end/grammar.pest"]
struct InputParser;

impl From<pest::error::Error<InputRule>> for Err {
    fn from(e: pest::error::Error<InputRule>) -> Self {
        Err::MalformedInput(e.to_string())
    }
}

/// Parse `<n> <v>` followed by exactly `v` lines of `<node1> <node2> <cost>`.
pub fn parse(input: &str) -> Result<EdgeList> {
    let mut num_vertices = 0;
    let mut num_edges = 0;
    let mut edges = vec![];
    for pair in InputParser::parse(Rule::input, input)?
        .next()
        .unwrap()
        .into_inner()
    {
        match pair.as_rule() {
            Rule::header => {
                let (n, v) = pair.into_inner().collect_tuple().unwrap();
                num_vertices = parse_int(n)?;
                num_edges = parse_int(v)?;
            }
            Rule::edge => edges.push(parse_edge(pair)?),
            Rule::EOI => {}
            _ => unreachable!(),
        }
    }
    if edges.len() != num_edges {
        return Err(Err::MalformedInput(format!(
            "expected {} edges, found {}",
            num_edges,
            edges.len()
        )));
    }
    Ok(EdgeList::new(num_vertices, edges))
}

fn parse_edge(pair: Pair<Rule>) -> Result<EdgeDef> {
    let (node1, node2, cost) = pair.into_inner().collect_tuple().unwrap();
    Ok((parse_int(node1)?, parse_int(node2)?, parse_int(cost)?))
}

fn parse_int<T: FromStr>(pair: Pair<Rule>) -> Result<T> {
    let (line, col) = pair.as_span().start_pos().line_col();
    pair.as_str().parse::<T>().map_err(|_| {
        Err::MalformedInput(format!(
            "{}:{}: integer out of range: {}",
            line,
            col,
            pair.as_str()
        ))
    })
}
