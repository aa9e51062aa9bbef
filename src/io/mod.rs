/// Types that can be stored to and loaded from an HDF5 file.
pub trait Hdf5File {
    type Object;

    /// Stores `Object` as an HDF5 file at `path`.
    fn write(&self, path: &str) -> anyhow::Result<()>;

    /// Reads `Object` from the HDF5 file at `path`.
    fn read(path: &str) -> anyhow::Result<Self::Object>;
}
