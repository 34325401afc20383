//! Regression model artifact
//!
//! Trained offline and shipped as JSON. Two shapes are supported:
//!   - `linear`: intercept + one coefficient per feature
//!   - `forest`: regression trees averaged, as a random forest regressor does
//!
//! Feature order: temperature (°C), humidity (%), hour of day.

use serde::{Deserialize, Serialize};

pub const N_FEATURES: usize = 3;

/// Why a prediction could not be computed
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("tree {tree}: node index {node} out of range")]
    NodeOutOfRange { tree: usize, node: usize },

    #[error("tree {tree}: feature index {feature} out of range")]
    FeatureOutOfRange { tree: usize, feature: usize },

    #[error("tree {tree}: traversal did not reach a leaf")]
    Cycle { tree: usize },

    #[error("forest has no trees")]
    EmptyForest,

    #[error("model produced a non-finite value")]
    NonFinite,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegressionModel {
    Linear {
        intercept: f64,
        coefficients: [f64; N_FEATURES],
    },
    Forest {
        trees: Vec<DecisionTree>,
    },
}

/// A regression tree stored as a flat node list; node 0 is the root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// Go to `left` when `features[feature] <= threshold`, else `right`
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

impl RegressionModel {
    pub fn predict(&self, features: &[f64; N_FEATURES]) -> Result<f64, ModelError> {
        let value = match self {
            RegressionModel::Linear { intercept, coefficients } => {
                intercept
                    + coefficients
                        .iter()
                        .zip(features.iter())
                        .map(|(c, x)| c * x)
                        .sum::<f64>()
            }
            RegressionModel::Forest { trees } => {
                if trees.is_empty() {
                    return Err(ModelError::EmptyForest);
                }
                let mut sum = 0.0;
                for (idx, tree) in trees.iter().enumerate() {
                    sum += tree.predict(idx, features)?;
                }
                sum / trees.len() as f64
            }
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(ModelError::NonFinite)
        }
    }

    /// Short description for logs
    pub fn describe(&self) -> String {
        match self {
            RegressionModel::Linear { .. } => "linear regression".to_string(),
            RegressionModel::Forest { trees } => format!("forest of {} trees", trees.len()),
        }
    }
}

impl DecisionTree {
    fn predict(&self, tree: usize, features: &[f64; N_FEATURES]) -> Result<f64, ModelError> {
        let mut node = 0;
        // A valid path visits each node at most once
        for _ in 0..self.nodes.len() {
            match self.nodes.get(node) {
                Some(TreeNode::Leaf { value }) => return Ok(*value),
                Some(TreeNode::Split { feature, threshold, left, right }) => {
                    let x = features
                        .get(*feature)
                        .ok_or(ModelError::FeatureOutOfRange { tree, feature: *feature })?;
                    node = if x <= threshold { *left } else { *right };
                }
                None => return Err(ModelError::NodeOutOfRange { tree, node }),
            }
        }
        match self.nodes.get(node) {
            Some(TreeNode::Leaf { value }) => Ok(*value),
            Some(TreeNode::Split { .. }) => Err(ModelError::Cycle { tree }),
            None => Err(ModelError::NodeOutOfRange { tree, node }),
        }
    }
}
