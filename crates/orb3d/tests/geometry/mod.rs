mod bounding_sphere_from_points;
mod bounding_sphere_plane;
mod bounding_sphere_queries;
