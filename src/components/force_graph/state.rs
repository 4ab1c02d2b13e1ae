use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::types::PreviewData;
use crate::edges::WeightClass;

pub const NODE_RADIUS: f64 = 9.0;
pub const HIT_RADIUS: f64 = 14.0;
const MIN_ZOOM: f64 = 0.2;
const MAX_ZOOM: f64 = 6.0;

#[derive(Clone, Debug, Default)]
pub struct VertexInfo {
	pub label: String,
}

#[derive(Clone, Debug)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

/// A press on the canvas: either dragging a vertex or panning the view.
#[derive(Clone, Debug)]
pub enum Gesture {
	DragVertex {
		idx: DefaultNodeIdx,
		grab_dx: f32,
		grab_dy: f32,
	},
	Pan {
		from_x: f64,
		from_y: f64,
		origin_x: f64,
		origin_y: f64,
	},
}

pub struct PreviewState {
	pub graph: ForceGraph<VertexInfo, WeightClass>,
	pub transform: ViewTransform,
	pub gesture: Option<Gesture>,
	pub hovered: Option<DefaultNodeIdx>,
	pub neighbors: HashSet<DefaultNodeIdx>,
	pub width: f64,
	pub height: f64,
	adjacency: HashMap<DefaultNodeIdx, Vec<DefaultNodeIdx>>,
}

impl PreviewState {
	pub fn new(data: &PreviewData, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 400.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let ring = 0.3 * width.min(height);
		let count = data.vertices.len().max(1) as f64;
		let mut by_vertex = HashMap::new();

		for (i, vertex) in data.vertices.iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / count;
			let idx = graph.add_node(NodeData {
				x: (ring * angle.cos()) as f32,
				y: (ring * angle.sin()) as f32,
				mass: 10.0,
				is_anchor: false,
				user_data: VertexInfo {
					label: vertex.to_string(),
				},
			});
			by_vertex.insert(*vertex, idx);
		}

		let mut adjacency: HashMap<DefaultNodeIdx, Vec<DefaultNodeIdx>> = HashMap::new();
		for link in &data.links {
			let (Some(&a), Some(&b)) = (by_vertex.get(&link.source), by_vertex.get(&link.target))
			else {
				continue;
			};
			graph.add_edge(a, b, EdgeData {
				user_data: link.class,
			});
			adjacency.entry(a).or_default().push(b);
			adjacency.entry(b).or_default().push(a);
		}

		Self {
			graph,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			gesture: None,
			hovered: None,
			neighbors: HashSet::new(),
			width,
			height,
			adjacency,
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			if dx.hypot(dy) < HIT_RADIUS {
				found = Some(node.index());
			}
		});
		found
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		if self.hovered == node {
			return;
		}
		self.hovered = node;
		self.neighbors = node
			.and_then(|idx| self.adjacency.get(&idx))
			.map(|adj| adj.iter().copied().collect())
			.unwrap_or_default();
	}

	/// True for the hovered vertex and its neighbours, or everything when idle.
	pub fn is_lit(&self, idx: DefaultNodeIdx) -> bool {
		match self.hovered {
			None => true,
			Some(h) => h == idx || self.neighbors.contains(&idx),
		}
	}

	pub fn press(&mut self, sx: f64, sy: f64) {
		self.gesture = Some(match self.node_at_position(sx, sy) {
			Some(idx) => {
				let (gx, gy) = self.screen_to_graph(sx, sy);
				let mut grab = (0.0, 0.0);
				self.graph.visit_nodes(|node| {
					if node.index() == idx {
						grab = (node.x() - gx as f32, node.y() - gy as f32);
					}
				});
				Gesture::DragVertex {
					idx,
					grab_dx: grab.0,
					grab_dy: grab.1,
				}
			}
			None => Gesture::Pan {
				from_x: sx,
				from_y: sy,
				origin_x: self.transform.x,
				origin_y: self.transform.y,
			},
		});
	}

	pub fn pointer_moved(&mut self, sx: f64, sy: f64) {
		match self.gesture.clone() {
			None => {
				let hovered = self.node_at_position(sx, sy);
				self.set_hover(hovered);
			}
			Some(Gesture::DragVertex {
				idx,
				grab_dx,
				grab_dy,
			}) => {
				let (gx, gy) = self.screen_to_graph(sx, sy);
				let (nx, ny) = (gx as f32 + grab_dx, gy as f32 + grab_dy);
				self.graph.visit_nodes_mut(|node| {
					if node.index() == idx {
						node.data.x = nx;
						node.data.y = ny;
						node.data.is_anchor = true;
					}
				});
			}
			Some(Gesture::Pan {
				from_x,
				from_y,
				origin_x,
				origin_y,
			}) => {
				self.transform.x = origin_x + (sx - from_x);
				self.transform.y = origin_y + (sy - from_y);
			}
		}
	}

	/// Ends any gesture. A dragged vertex stays pinned where it was dropped.
	pub fn release(&mut self) {
		self.gesture = None;
	}

	pub fn leave(&mut self) {
		self.gesture = None;
		self.set_hover(None);
	}

	/// Zooms around the pointer; `zoom_in` picks the direction.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, zoom_in: bool) {
		let factor = if zoom_in { 1.1 } else { 0.9 };
		let k = (self.transform.k * factor).clamp(MIN_ZOOM, MAX_ZOOM);
		let ratio = k / self.transform.k;
		self.transform.x = sx - (sx - self.transform.x) * ratio;
		self.transform.y = sy - (sy - self.transform.y) * ratio;
		self.transform.k = k;
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.transform.x += (width - self.width) / 2.0;
		self.transform.y += (height - self.height) / 2.0;
		self.width = width;
		self.height = height;
	}
}
