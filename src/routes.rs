//! A module for describing the nonstop routes a carrier flies.

use std::{
    borrow::Borrow,
    collections::{HashMap, HashSet},
    fmt::{self, Debug, Display},
    hash::Hash,
    marker::PhantomData,
    str::FromStr,
};

use serde::{
    de::{MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};
use tracing::warn;

use crate::error::{Error, Result};

/// An airport identifier, e.g. an IATA code like `DEN`.
///
/// Codes are opaque: the only check is that they aren't empty.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AirportCode(pub(crate) String);

impl AirportCode {
    /// Creates a new airport code.
    ///
    /// # Examples
    ///
    /// ```
    /// use airroutes::routes::AirportCode;
    ///
    /// assert_eq!(AirportCode::new("DEN").unwrap().as_str(), "DEN");
    /// assert!(AirportCode::new("").is_err());
    /// ```
    pub fn new(code: impl Into<String>) -> Result<Self> {
        let code = code.into();

        if code.is_empty() {
            return Err(Error::InvalidCode(code));
        }

        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Debug for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl Borrow<str> for AirportCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for AirportCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for AirportCode {
    type Error = Error;

    fn try_from(code: String) -> Result<Self> {
        Self::new(code)
    }
}

impl From<AirportCode> for String {
    fn from(code: AirportCode) -> Self {
        code.0
    }
}

/// A mapping of origin airports to the airports they serve nonstop.
///
/// Origins and their destinations keep the order they were first inserted in, duplicates are
/// ignored and an airport is never recorded as its own destination.
#[derive(Clone, Debug)]
pub struct RouteMap<T> {
    /// Origins with their destinations, in insertion order.
    routes: Vec<(T, Vec<T>)>,
    /// Position of each origin in `routes`.
    index: HashMap<T, usize>,
}

impl<T> Default for RouteMap<T>
where
    T: Clone + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RouteMap<T>
where
    T: Clone + Eq + Hash + Debug,
{
    /// Creates an empty route map.
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Records a nonstop route, returning whether it wasn't already present.
    ///
    /// Fails with [`Error::SelfLoop`] if `origin` and `destination` are the same airport, the
    /// origin is still registered in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use airroutes::routes::RouteMap;
    ///
    /// let mut routes = RouteMap::new();
    ///
    /// assert_eq!(routes.try_insert("DEN", "ORD"), Ok(true));
    /// assert_eq!(routes.try_insert("DEN", "ORD"), Ok(false));
    /// assert!(routes.try_insert("DEN", "DEN").is_err());
    /// ```
    pub fn try_insert(&mut self, origin: T, destination: T) -> Result<bool> {
        let is_loop = origin == destination;
        let destinations = self.entry(origin);

        if is_loop {
            return Err(Error::SelfLoop(format!("{destination:?}")));
        }

        if destinations.contains(&destination) {
            return Ok(false);
        }

        destinations.push(destination);

        Ok(true)
    }

    /// Records a nonstop route, returning whether it was inserted.
    ///
    /// Self-loops carry no meaning in a point-to-point network and are dropped with a warning.
    pub fn insert(&mut self, origin: T, destination: T) -> bool {
        match self.try_insert(origin, destination) {
            Ok(is_inserted) => is_inserted,
            Err(err) => {
                warn!("dropping route: {err}");
                false
            }
        }
    }

    /// Records the `(origin, destination)` routes for each destination. The origin is registered
    /// even if no destination survives deduplication.
    pub fn insert_routes<I>(&mut self, origin: T, destinations: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.entry(origin.clone());

        for destination in destinations {
            self.insert(origin.clone(), destination);
        }
    }

    /// Returns the destinations served nonstop from `origin`.
    pub fn destinations<Q>(&self, origin: &Q) -> Option<&[T]>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index
            .get(origin)
            .map(|&i| self.routes[i].1.as_slice())
    }

    /// Iterates over the origins and their destinations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, &[T])> {
        self.routes
            .iter()
            .map(|(origin, destinations)| (origin, destinations.as_slice()))
    }

    /// Returns the number of origins.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Returns the number of `(origin, destination)` pairs recorded.
    pub fn route_count(&self) -> usize {
        self.routes.iter().map(|(_, d)| d.len()).sum()
    }

    /// Returns every airport mentioned, as an origin or a destination, each exactly once and in
    /// the order it was first seen.
    ///
    /// # Examples
    ///
    /// ```
    /// use airroutes::routes::RouteMap;
    ///
    /// let routes: RouteMap<_> = [("DEN", vec!["ORD", "LAX"]), ("ORD", vec!["DEN"])]
    ///     .into_iter()
    ///     .collect();
    ///
    /// assert_eq!(routes.airports(), vec![&"DEN", &"ORD", &"LAX"]);
    /// ```
    pub fn airports(&self) -> Vec<&T> {
        let mut seen = HashSet::new();

        self.routes
            .iter()
            .flat_map(|(origin, destinations)| std::iter::once(origin).chain(destinations))
            .filter(|airport| seen.insert(*airport))
            .collect()
    }

    //
    // Private
    //

    /// Returns the destinations of `origin`, registering it first if needed.
    fn entry(&mut self, origin: T) -> &mut Vec<T> {
        let i = match self.index.get(&origin) {
            Some(&i) => i,
            None => {
                self.routes.push((origin.clone(), Vec::new()));
                self.index.insert(origin, self.routes.len() - 1);
                self.routes.len() - 1
            }
        };

        &mut self.routes[i].1
    }
}

//
// Trait implementations
//

impl<T: PartialEq> PartialEq for RouteMap<T> {
    fn eq(&self, other: &Self) -> bool {
        self.routes == other.routes
    }
}

impl<T, I> FromIterator<(T, I)> for RouteMap<T>
where
    T: Clone + Eq + Hash + Debug,
    I: IntoIterator<Item = T>,
{
    fn from_iter<It: IntoIterator<Item = (T, I)>>(iter: It) -> Self {
        let mut routes = Self::new();
        for (origin, destinations) in iter {
            routes.insert_routes(origin, destinations);
        }

        routes
    }
}

impl<T: Serialize> Serialize for RouteMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.routes.len()))?;
        for (origin, destinations) in &self.routes {
            map.serialize_entry(origin, destinations)?;
        }

        map.end()
    }
}

/// Reads `{ origin: [destination, ...], ... }` keeping the document order.
struct RouteMapVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for RouteMapVisitor<T>
where
    T: Deserialize<'de> + Clone + Eq + Hash + Debug,
{
    type Value = RouteMap<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of origin airports to lists of destinations")
    }

    fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut routes = RouteMap::new();
        while let Some((origin, destinations)) = access.next_entry::<T, Vec<T>>()? {
            routes.insert_routes(origin, destinations);
        }

        Ok(routes)
    }
}

impl<'de, T> Deserialize<'de> for RouteMap<T>
where
    T: Deserialize<'de> + Clone + Eq + Hash + Debug,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(RouteMapVisitor(PhantomData))
    }
}
