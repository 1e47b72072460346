use log::{debug, info, warn};
use nalgebra::Point3;
use std::path::Path;

/// Triangle mesh: vertex positions plus index triples into them.
///
/// Every face is checked against the vertex list on construction, so the
/// accessors can index without further validation.
#[derive(Debug, Clone)]
pub struct Model {
    vertices: Vec<Point3<f32>>,
    faces: Vec<[usize; 3]>,
}

impl Model {
    /// Builds a model, rejecting faces that reference missing vertices.
    pub fn from_parts(vertices: Vec<Point3<f32>>, faces: Vec<[usize; 3]>) -> Result<Self, String> {
        for (i, face) in faces.iter().enumerate() {
            if let Some(&bad) = face.iter().find(|&&idx| idx >= vertices.len()) {
                return Err(format!(
                    "Face {} references vertex {}, but the model only has {} vertices",
                    i,
                    bad,
                    vertices.len()
                ));
            }
        }
        Ok(Model { vertices, faces })
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn vert(&self, i: usize) -> Point3<f32> {
        self.vertices[i]
    }

    pub fn face(&self, i: usize) -> [usize; 3] {
        self.faces[i]
    }

    /// The three vertex positions of face `i`, in winding order.
    pub fn face_vertices(&self, i: usize) -> [Point3<f32>; 3] {
        self.faces[i].map(|idx| self.vertices[idx])
    }
}

/// Loads an OBJ file into a single [`Model`].
///
/// Uses the `tobj` crate for parsing and triangulation. All meshes in the
/// file are merged into one vertex list; materials are ignored.
pub fn load_obj<P: AsRef<Path>>(obj_path: P) -> Result<Model, String> {
    let obj_path_ref = obj_path.as_ref();
    info!("Loading OBJ file: {:?}", obj_path_ref);

    let load_options = tobj::LoadOptions {
        triangulate: true,
        single_index: true,
        ignore_points: true,
        ignore_lines: true,
    };

    let (models, _materials) = tobj::load_obj(obj_path_ref, &load_options)
        .map_err(|e| format!("Failed to load OBJ {:?}: {}", obj_path_ref, e))?;

    let mut vertices: Vec<Point3<f32>> = Vec::new();
    let mut faces: Vec<[usize; 3]> = Vec::new();

    for model in models.iter() {
        let mesh = &model.mesh;
        if mesh.indices.is_empty() {
            warn!("Skipping mesh '{}' with no faces.", model.name);
            continue;
        }
        if mesh.positions.len() % 3 != 0 || mesh.indices.len() % 3 != 0 {
            return Err(format!(
                "Mesh '{}' has malformed position or index data",
                model.name
            ));
        }

        let offset = vertices.len();
        vertices.extend(
            mesh.positions
                .chunks_exact(3)
                .map(|p| Point3::new(p[0], p[1], p[2])),
        );
        faces.extend(mesh.indices.chunks_exact(3).map(|tri| {
            [
                offset + tri[0] as usize,
                offset + tri[1] as usize,
                offset + tri[2] as usize,
            ]
        }));

        debug!(
            "Processed mesh '{}': {} vertices, {} triangles",
            model.name,
            mesh.positions.len() / 3,
            mesh.indices.len() / 3
        );
    }

    if faces.is_empty() {
        return Err(format!("No faces found in OBJ file {:?}", obj_path_ref));
    }

    let model = Model::from_parts(vertices, faces)?;
    info!(
        "Model loaded: {} vertices, {} faces",
        model.vertex_count(),
        model.face_count()
    );
    Ok(model)
}
